mod command;
mod high_score_store;
mod util;
mod view;

fn main() -> anyhow::Result<()> {
    command::run()
}
