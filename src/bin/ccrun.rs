use anyhow::Result;

fn main() -> Result<()> {
    ccrun::cli::run()
}
