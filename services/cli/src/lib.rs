mod cli;
mod prompt;

use tla_abbrev::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
