use anyhow::Result;
use setops::error::UsageError;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_env("SETOPS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let (color, command) = setops::args::parsed();
    let outcome = command.map_err(anyhow::Error::from).and_then(|command| {
        setops::execute(&command, color, std::path::Path::new("."))
    });
    match outcome {
        // Usage errors go to stdout and still exit 0
        Err(e) => match e.downcast_ref::<UsageError>() {
            Some(usage) => println!("{}", setops::usage_message(usage, color)),
            None => return Err(e),
        },
        Ok(()) => {}
    }
    Ok(())
}
