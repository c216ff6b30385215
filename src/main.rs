use anyhow::{Context, Result};
use registrar::{Config, Schedule, Student, StudentIds};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("REGISTRAR_CONF") {
        Ok(path) => Config::load(&path).with_context(|| format!("loading {path}"))?,
        Err(_) => Config::default(),
    };

    let mut ids = StudentIds::with_prefix(config.id_prefix.clone());
    let mut student = Student::from_config("Ali", &mut ids, &config);

    let mut schedule = Schedule::from_config(&config);

    println!("{}", schedule.display_schedule("Monday"));

    let registration = schedule.register_student(&mut student);
    println!("{registration}");

    println!("{student}");

    println!("{}", schedule.display_schedule("Wednesday"));

    Ok(())
}
