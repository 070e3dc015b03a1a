use clap::{Arg, Command};
use std::path::Path;
use std::process;

use bucketcheck::check::Checker;
use bucketcheck::config::{ColorMode, Settings};
use bucketcheck::error::CheckError;
use bucketcheck::logging::{self, debug};
use bucketcheck::remote::S3Lister;
use bucketcheck::report;

fn load_settings(explicit: Option<&String>) -> Result<Settings, CheckError> {
	let settings = match explicit {
		Some(path) => Settings::load_file(Path::new(path))?,
		None => Settings::load_from_dir(Path::new("."))?,
	};
	let settings = settings.with_env()?;
	settings.validate()?;
	Ok(settings)
}

async fn run(config: Option<&String>) -> Result<(), CheckError> {
	let settings = load_settings(config)?;
	debug!("Settings: {:?}", settings);
	report::apply_color_mode(settings.color);

	let lister = S3Lister::connect(&settings.region).await;
	let stdout = std::io::stdout();
	let mut out = stdout.lock();

	let result = Checker::new(&settings, &lister).run(&mut out).await?;
	report::render(&result, &mut out, settings.color != ColorMode::Never).map_err(CheckError::Output)
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
	logging::init_tracing();

	let matches = Command::new("bucketcheck")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Compare a local directory with an S3 bucket")
		.arg(
			Arg::new("config")
				.short('c')
				.long("config")
				.value_name("FILE")
				.help("Settings file (default: config.toml / .json / .json5 / .yaml / .yml in the working directory)"),
		)
		.get_matches();

	if let Err(e) = run(matches.get_one::<String>("config")).await {
		eprintln!("{}", e);
		process::exit(e.exit_code());
	}
}

// vim: ts=4
