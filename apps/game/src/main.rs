use nomination::config::GameConfig;
use nomination::prompt::console::ConsolePrompt;
use nomination::services::game_flow::GameFlow;
use nomination::telemetry;

fn main() {
    telemetry::init_tracing();

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let mut flow = GameFlow::new(ConsolePrompt::new(), config.seed);
    if let Err(e) = flow.run() {
        eprintln!("❌ Game aborted: {e}");
        std::process::exit(1);
    }
}
