use record_keeper::{cli::grades::GradeManager, init};

fn main() {
    init();

    let mut manager = GradeManager::from_env();
    if let Err(err) = manager.run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
