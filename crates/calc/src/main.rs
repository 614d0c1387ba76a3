use std::error::Error;

use calc::calculate;
use tracing_subscriber::EnvFilter;

mod interactive;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = std::env::args();
    if args.len() == 1 {
        interactive::interactive()
    } else {
        let mut failed = false;
        for code in args.skip(1) {
            match calculate(&code) {
                Ok(calculation) => {
                    println!("{}", interactive::render_postfix(&calculation.postfix));
                    interactive::print_result(calculation.value);
                }
                Err(err) => {
                    interactive::print_error(&err);
                    failed = true;
                }
            }
        }
        if failed {
            std::process::exit(1);
        }
        Ok(())
    }
}
