use fsoc_core::gate::GateError;
use owo_colors::OwoColorize as _;

fn main() {
  if let Err(err) = fsoc::run() {
    // Gate failures were already written to the console by the diagnostics sink.
    if err.downcast_ref::<GateError>().is_none() {
      anstream::eprintln!("{}", format!("{err:#}").red());
    }
    std::process::exit(1);
  }
}
