fn main() -> anyhow::Result<()> {
    dto2mvc::cli::run_cli()
}
