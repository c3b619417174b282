use crate::cli::{ReportFormat, SourceArgs};
use crate::conf::{ConfigError, load_redirects};
use miette::Report;

/// Load and validate redirects. Returns `false` when anything is invalid.
pub fn check(sources: &SourceArgs, format: ReportFormat) -> anyhow::Result<bool> {
    let options = match sources.load_options() {
        Ok(options) => options,
        Err(err) => {
            print_config_error(err, format != ReportFormat::Pretty);
            return Ok(false);
        }
    };

    let loaded = match load_redirects(&options) {
        Ok(loaded) => loaded,
        Err(err) => {
            print_config_error(err, format != ReportFormat::Pretty);
            return Ok(false);
        }
    };

    match format {
        ReportFormat::Json => loaded.report.render_json()?,
        ReportFormat::Plain => loaded.report.render_plain(),
        ReportFormat::Pretty => {
            println!("✔ {} redirects files", options.redirects_files.len());
            println!("✔ {} redirects", loaded.redirects.len());
            println!(
                "✔ {} proxies",
                loaded.redirects.iter().filter(|r| r.proxy).count()
            );
            println!();
            loaded.report.render_pretty();
        }
    }

    Ok(!loaded.report.has_errors())
}

fn print_config_error(err: ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{:?}", Report::new(err));
    }
}
