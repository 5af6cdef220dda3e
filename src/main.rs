//! Highlighted calendar CLI application.
//!
//! # Usage
//! ```ignore
//! hcal                      // Current month, today starred
//! hcal 2024-03              // March 2024
//! hcal 2024-03 2024-05      // March through May 2024
//! hcal -d 5,6,7             // Bracket days 5-7
//! hcal -D 2024-12-25        // Star Christmas 2024
//! ```

use hcal::args::{Args, get_display_range};
use hcal::formatter::print_blocks;
use hcal::types::GridContext;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("hcal: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    let ctx = GridContext::new(args)?;
    let (start, end) = get_display_range(args)?;

    let blocks = ctx.build(start, end);
    print_blocks(&blocks);

    Ok(())
}
