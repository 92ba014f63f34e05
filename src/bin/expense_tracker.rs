use record_keeper::{cli::expense::ExpenseTracker, init};

fn main() {
    init();

    let mut tracker = ExpenseTracker::from_env();
    if let Err(err) = tracker.run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
