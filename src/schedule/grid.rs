use std::collections::BTreeSet;
use super::types::ScheduleError;

/// Room × time-slot grid. Owns both catalogs and the occupancy record;
/// occupancy only changes through `reserve` and `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridModel {
    rooms: Vec<String>,
    time_slots: Vec<String>,
    occupancy: Vec<BTreeSet<usize>>, // indexed like `rooms`, holds slot indices
    starts: Vec<BTreeSet<usize>>,    // first slot of each reserved window
}

impl GridModel {
    pub fn new(rooms: Vec<String>, time_slots: Vec<String>) -> Self {
        let occupancy = vec![BTreeSet::new(); rooms.len()];
        let starts = occupancy.clone();
        GridModel { rooms, time_slots, occupancy, starts }
    }

    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    pub fn time_slots(&self) -> &[String] {
        &self.time_slots
    }

    pub fn slot_count(&self) -> usize {
        self.time_slots.len()
    }

    pub fn room_index(&self, room: &str) -> Option<usize> {
        self.rooms.iter().position(|r| r == room)
    }

    /// Clears every room's reservations
    pub fn reset(&mut self) {
        for reserved in self.occupancy.iter_mut().chain(self.starts.iter_mut()) {
            reserved.clear();
        }
    }

    /// Checks that `[start_index, start_index + duration)` lies inside the
    /// catalog and is entirely free in `room`. Unknown rooms are never available.
    pub fn is_available(&self, room: &str, start_index: usize, duration: usize) -> bool {
        match self.room_index(room) {
            Some(idx) => self.is_available_at(idx, start_index, duration),
            None => false,
        }
    }

    pub(crate) fn is_available_at(&self, room_index: usize, start_index: usize, duration: usize) -> bool {
        let end = match start_index.checked_add(duration) {
            Some(end) => end,
            None => return false,
        };
        if end > self.slot_count() {
            return false;
        }
        let reserved = &self.occupancy[room_index];
        (start_index..end).all(|slot| !reserved.contains(&slot))
    }

    /// Marks the window as reserved. Availability is the caller's job; this
    /// does not check for an existing booking. Slots past the last label are
    /// dropped.
    pub fn reserve(&mut self, room: &str, start_index: usize, duration: usize) -> Result<(), ScheduleError> {
        let idx = self
            .room_index(room)
            .ok_or_else(|| ScheduleError::UnknownRoom(room.to_string()))?;
        self.reserve_at(idx, start_index, duration);
        Ok(())
    }

    pub(crate) fn reserve_at(&mut self, room_index: usize, start_index: usize, duration: usize) {
        let end = start_index.saturating_add(duration).min(self.slot_count());
        if start_index < end {
            self.starts[room_index].insert(start_index);
        }
        self.occupancy[room_index].extend(start_index..end);
    }

    pub fn is_reserved(&self, room_index: usize, slot_index: usize) -> bool {
        self.occupancy
            .get(room_index)
            .map(|reserved| reserved.contains(&slot_index))
            .unwrap_or(false)
    }

    /// Whether a reserved window begins at this slot. Back-to-back meetings
    /// each keep their own start.
    pub fn is_meeting_start(&self, room_index: usize, slot_index: usize) -> bool {
        self.starts
            .get(room_index)
            .map(|starts| starts.contains(&slot_index))
            .unwrap_or(false)
    }

    /// Reserved slot labels for a room, in chronological order
    pub fn reserved_slots(&self, room: &str) -> Option<Vec<&str>> {
        let idx = self.room_index(room)?;
        Some(
            self.occupancy[idx]
                .iter()
                .map(|&slot| self.time_slots[slot].as_str())
                .collect(),
        )
    }

    pub fn reserved_count(&self) -> usize {
        self.occupancy.iter().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved_count() == 0
    }
}
