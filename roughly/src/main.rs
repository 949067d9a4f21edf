mod cli;
mod exit_codes;
mod output;

use clap::Parser;

fn main() {
    let cli = match cli::Cli::try_parse() {
        Ok(v) => v,
        Err(err) => {
            use clap::error::ErrorKind;
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    exit_codes::ExitCode::Success.as_i32()
                }
                _ => exit_codes::ExitCode::InvalidInput.as_i32(),
            };
            std::process::exit(code);
        }
    };

    let report = output::Report::new(cli.duration);
    output::print_report(cli.output, cli.bare, &report);

    std::process::exit(exit_codes::ExitCode::Success.as_i32());
}
