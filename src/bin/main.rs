use acfg::*;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 5;
    let graph_type = GraphType::Undirected;

    for degree in AltruismDegree::ALL {
        let now = Instant::now();
        match FriendGame::count_without_core_stable(n, graph_type, degree) {
            Ok((count_unstable, count_total, game)) => {
                log::info!(
                    "degree: {} n: {} graphs: {} without core-stable structure: {}",
                    degree,
                    n,
                    count_total,
                    count_unstable
                );
                if let Some(game) = game {
                    log::info!("first counterexample: {:?}", game.friends().edges().collect::<Vec<_>>());
                }
            }
            Err(e) => {
                log::error!("analysis failed: {}", e);
                std::process::exit(1);
            }
        }
        log::info!("time: {} seconds", now.elapsed().as_secs_f64());
    }
}
