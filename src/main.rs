fn main() -> anyhow::Result<()> {
    malarr::run()
}
