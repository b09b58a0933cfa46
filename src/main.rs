use address_book::logging;
use address_book::prelude::run_app;
use dotenv::dotenv;

fn main() {
    // .env may carry RUST_LOG as well as ADDRESS_BOOK_PATH
    dotenv().ok();
    logging::init();

    if let Err(e) = run_app() {
        tracing::error!(error = %e, "address book stopped");
        eprintln!("{e}");
    }
}
