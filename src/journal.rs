// src/journal.rs
//
// Journal (natif) : tracing-subscriber sur stderr.
// Priorité du filtre : RUST_LOG, puis le niveau de la config, puis "warn".
// stdout reste réservé à la sortie du mode --touches.

use tracing_subscriber::EnvFilter;

const NIVEAU_SECOURS: &str = "warn";

/// Filtre effectif. Un niveau de config illisible retombe sur "warn" (signalé par l’appelant).
fn filtre(niveau_config: &str) -> (EnvFilter, bool) {
    if let Ok(f) = EnvFilter::try_from_default_env() {
        return (f, true);
    }
    match EnvFilter::try_new(niveau_config) {
        Ok(f) => (f, true),
        Err(_) => (EnvFilter::new(NIVEAU_SECOURS), false),
    }
}

/// Installe le subscriber global. Retourne false si le niveau configuré était illisible.
pub fn initialiser(niveau_config: &str) -> bool {
    let (filtre, lisible) = filtre(niveau_config);

    // try_init : un second appel (tests) n’est pas une erreur
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    lisible
}
