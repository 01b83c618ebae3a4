use pattern_catalog::app;

fn main() -> anyhow::Result<()> {
    app::main()
}
