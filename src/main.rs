use registrar::ui::output;

fn main() {
    if let Err(err) = registrar::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
