use std::path::Path;

use meeting_scheduler::config::SchedulerConfig;
use meeting_scheduler::display::{format_allocation, print_grid, render_board, render_chart, write_grid_to_file};
use meeting_scheduler::export::export_grid_to_csv;
use meeting_scheduler::parser::parse_meeting_arg;
use meeting_scheduler::schedule::SchedulerSession;
use meeting_scheduler::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SchedulerConfig::load()?;
    let grid = config.build_grid()?;
    let mut session = SchedulerSession::new(grid);

    // Check if we should run in web mode
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "web" {
        let port = args.get(2)
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        println!("Starting web server on port {}...", port);
        println!("Access the API at http://localhost:{}/api/grid", port);

        web::start_server(port, session).await?;
        return Ok(());
    }

    if args.len() > 1 && args[1] == "optimal" {
        if let Some(duration) = args.get(2) {
            if let Err(e) = session.set_duration(duration) {
                println!("Error: {}", e);
                return Ok(());
            }
        }

        match session.generate_optimal() {
            Ok(placement) => {
                println!("\n=== Queen placement ({} rooms) ===", placement.size());
                println!("{}", render_board(&placement));
                print_grid("Optimal Schedule", session.grid());
                println!("\n{}", render_chart(session.grid(), session.current_duration()));
                write_reports("Optimal Schedule", &session)?;
            }
            Err(e) => println!("Error: {}", e),
        }
        return Ok(());
    }

    // CLI mode: every argument is a meeting request, `duration` or `duration@start`
    if args.len() < 2 {
        println!("Usage:");
        println!("  meeting-scheduler <duration>[@<start>] ...   schedule meetings first-fit");
        println!("  meeting-scheduler optimal [duration]         N-Queens layout");
        println!("  meeting-scheduler web [port]                 start the HTTP API");
        print_grid("Current Schedule", session.grid());
        return Ok(());
    }

    println!("Scheduling {} meeting request(s)", args.len() - 1);
    let first_slot = session.grid().time_slots().first().cloned();
    for arg in &args[1..] {
        let request = parse_meeting_arg(arg);
        let start_time = request.start_time.as_deref().or(first_slot.as_deref());
        match session.schedule_meeting(&request.duration, start_time) {
            Ok(allocation) => println!("Success: {}", format_allocation(&allocation)),
            Err(e) => println!("Error ({}): {}", arg, e),
        }
    }

    print_grid("Schedule", session.grid());
    println!("\n{}", render_chart(session.grid(), session.current_duration()));
    write_reports("Schedule", &session)?;

    Ok(())
}

fn write_reports(title: &str, session: &SchedulerSession) -> Result<(), Box<dyn std::error::Error>> {
    println!("\n=== Writing Schedule to Files ===");
    write_grid_to_file(title, session.grid(), "schedule_grid.txt")?;
    export_grid_to_csv(session.grid(), Path::new("schedule_grid.csv"))?;
    println!("Schedule saved to:");
    println!("  - schedule_grid.txt");
    println!("  - schedule_grid.csv");
    Ok(())
}
