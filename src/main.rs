mod api;
mod classify;
mod cli;
mod console_format;
mod error;
mod format;
mod report;
mod request;
mod ui;
mod wcif;

use cli::OutputFormat;
use log::debug;
use std::io;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Set console width override if specified (for testing)
    if let Some(width) = args.console_width {
        console_format::set_console_width(width);
    }

    let format = args.output_format();
    debug!("competition {:?}, output {:?}", args.competition_id, format);

    let double_check = match request::handle_user_request(&api::WcaApi, &args.competition_id) {
        Ok(report) => report,
        Err(e) => {
            ui::print_error(&e.user_message());
            std::process::exit(1);
        }
    };

    ui::status("WCIF fetched successfully!");

    match format {
        OutputFormat::Console => {
            report::print_console_report(&double_check);
        }
        OutputFormat::Markdown => {
            println!("{}", report::render_markdown(&double_check));
        }
        OutputFormat::Json => {
            if let Err(e) = report::export_json_report(&double_check, io::stdout()) {
                ui::print_error(&format!("Failed to write JSON report: {}", e));
                std::process::exit(1);
            }
            println!();
        }
    }
}
