// src/main.rs
//
// Calculatrice scientifique, point d’entrée NATIF + WEB (WASM)
// -------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : options + config + journal, puis
//     * --touches : rejeu sans fenêtre, sortie texte / JSON
//     * sinon     : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

#[cfg(not(target_arch = "wasm32"))]
mod cli;
#[cfg(not(target_arch = "wasm32"))]
mod config;
#[cfg(not(target_arch = "wasm32"))]
mod journal;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice scientifique";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use tracing::{info, warn};

    let args = cli::Args::parse();

    // Fichier explicite illisible : erreur. Fichier par défaut illisible : défauts + avertissement.
    let (mut cfg, ignoree) = match config::charger(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) if args.config.is_none() => (config::Config::default(), Some(e)),
        Err(e) => return Err(e).context("chargement de la configuration"),
    };
    cfg.surcharger(args.base, args.mode_angle(), args.journal.as_deref());

    if !journal::initialiser(&cfg.journal) {
        warn!(filtre = %cfg.journal, "filtre de journal illisible, repli sur \"warn\"");
    }
    if let Some(e) = ignoree {
        warn!(erreur = %e, "configuration par défaut ignorée");
    }
    info!(base = %cfg.base, radians = cfg.radians, "démarrage");

    let depart = AppCalc::avec_reglages(cfg.radians, cfg.base);

    if let Some(script) = &args.touches {
        let fin = cli::rejouer(script, depart.calc).context("lecture du script --touches")?;
        if args.json {
            println!("{}", cli::rendu_json(&fin).context("sérialisation JSON")?);
        } else {
            print!("{}", cli::rendu_texte(&fin));
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([440.0, 760.0])
            .with_min_inner_size([380.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(TITRE_APP, options, Box::new(move |_cc| Ok(Box::new(depart))))
        .map_err(|e| anyhow::anyhow!("fenêtre : {e}"))
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// Pas de fichier de config ni de journal côté web : réglages par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
