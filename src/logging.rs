use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "crossword=info";

/// Install the stderr subscriber. Filtering follows `RUST_LOG`, falling back to
/// `crossword=info`. Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );

    if subscriber.try_init().is_err() {
        return false;
    }

    install_panic_hook();

    tracing::debug!("tracing initialized");
    true
}

/// Log panics through tracing, then hand them on to the hook that was installed before, so the
/// usual message and backtrace still reach stderr.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn panic_hook_chains_to_previous() {
        let reached = Arc::new(AtomicBool::new(false));
        std::panic::set_hook(Box::new({
            let reached = reached.clone();
            move |_| reached.store(true, Ordering::SeqCst)
        }));
        install_panic_hook();

        let result = std::panic::catch_unwind(|| panic!("boom"));
        // Back to the default hook.
        let _ = std::panic::take_hook();

        assert!(result.is_err());
        assert!(reached.load(Ordering::SeqCst));
    }
}
