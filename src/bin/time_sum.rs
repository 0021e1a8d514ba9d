use clap::Parser;
use court_finder::sum_time_components;

#[derive(Parser)]
#[command(name = "time-sum")]
#[command(about = "Sums the numeric components of HH:MM:SS time strings")]
struct Args {
    /// One or more time strings, e.g. "01:02:03"
    #[arg(required = true)]
    times: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut failed = false;
    for time in &args.times {
        match sum_time_components(time) {
            Ok(total) => println!("{} -> {}", time, total),
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }

    Ok(())
}
