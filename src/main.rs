//! deck-cards - List Nextcloud Deck cards grouped by stack

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = deck_cards::cli::run() {
        ExitCode::from(deck_cards::cli::report(&e))
    } else {
        ExitCode::SUCCESS
    }
}
