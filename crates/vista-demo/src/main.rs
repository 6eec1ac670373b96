//! Demo binary that composes a few frames of LOD render lists and logs them.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p vista-demo -- --lod-bias 1 --log-level debug`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use glam::{Quat, Vec3};
use tracing::{error, info, warn};
use vista_config::{CliArgs, Config};
use vista_lod::LodSelector;
use vista_materials::{
    MaterialBuilder, MaterialError, MaterialLibrary, MaterialRequest, PaletteCategory,
};
use vista_mesh::build_plane;
use vista_render::{Camera, InstanceTransform, RenderTargets};
use vista_scene::{
    BackgroundKind, DrawablePart, LodTier, Model, Palette, PaletteTime, build_background_model,
};

const BACKGROUND_LIST: &str = "background";
const FRAMES: u32 = 10;

/// A billboard tree with three tiers: detailed, medium, and a single card.
/// The lit-window card only appears at night.
fn build_tree_model(materials: &mut impl MaterialBuilder) -> Result<Model, MaterialError> {
    let foliage = materials.build(MaterialRequest::new(PaletteCategory::Default))?;
    let glow = materials.build(MaterialRequest::new(PaletteCategory::Default).with_shading(false))?;

    let tiers = [8, 4, 1]
        .into_iter()
        .map(|segments| {
            let card = Arc::new(build_plane(4.0, 8.0, segments, segments));
            let mut flats = vec![Arc::new(DrawablePart::new(
                format!("tree-card-{segments}"),
                Arc::clone(&card),
                foliage,
            ))];
            if segments > 1 {
                flats.push(Arc::new(
                    DrawablePart::new("tree-lights", card, glow)
                        .with_palette_time(PaletteTime::Night),
                ));
            }
            let mut trunk = build_plane(0.5, 3.0, 1, segments);
            trunk.rotate(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
            let volumes = vec![Arc::new(DrawablePart::new(
                "tree-trunk",
                Arc::new(trunk),
                foliage,
            ))];
            LodTier::new(flats, volumes)
        })
        .collect();

    Ok(Model::new(tiers, 8.0, Vec3::ZERO))
}

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    vista_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = config.validate() {
        warn!("{e}, using defaults");
        config = Config::default();
    }

    let mut materials = MaterialLibrary::new();
    let sizes = config.background.sizes();

    let backgrounds = [BackgroundKind::Ground, BackgroundKind::Sky]
        .into_iter()
        .map(|kind| {
            build_background_model(kind, &sizes, &mut materials)
                .map(|model| LodSelector::new(Arc::new(model), config.lod.bias))
        })
        .collect::<Result<Vec<_>, _>>();
    let backgrounds = match backgrounds {
        Ok(selectors) => selectors,
        Err(e) => {
            error!("Failed to build background: {e}");
            return;
        }
    };

    let tree = match build_tree_model(&mut materials) {
        Ok(model) => LodSelector::new(Arc::new(model), config.lod.bias),
        Err(e) => {
            error!("Failed to build tree model: {e}");
            return;
        }
    };
    info!(
        "Built {} models using {} materials (LOD bias {})",
        backgrounds.len() + 1,
        materials.len(),
        config.lod.bias
    );

    let mut targets = RenderTargets::new();
    targets.insert(BACKGROUND_LIST);
    targets.insert(config.lod.flats_list.as_str());
    targets.insert(config.lod.volumes_list.as_str());

    let camera = Camera::perspective_degrees(Vec3::new(0.0, 2.0, 0.0), 60.0, 16.0 / 9.0);

    for frame in 0..FRAMES {
        targets.clear_lists();

        let time = if frame % 2 == 0 {
            PaletteTime::Day
        } else {
            PaletteTime::Night
        };
        let palette = Palette::new("demo", time);

        for background in &backgrounds {
            background.add_to_render_list(
                InstanceTransform::IDENTITY,
                &camera,
                &palette,
                BACKGROUND_LIST,
                BACKGROUND_LIST,
                &mut targets,
            );
        }

        let distance = 4.0 * 2f32.powi(frame as i32);
        let placement = InstanceTransform::from_translation(Vec3::new(0.0, 0.0, -distance));
        let composition = tree.add_to_render_list(
            placement,
            &camera,
            &palette,
            &config.lod.flats_list,
            &config.lod.volumes_list,
            &mut targets,
        );

        let count = |id: &str| targets.get(id).map_or(0, |list| list.part_count());
        info!(
            frame,
            distance,
            tier = composition.tier(),
            culled = composition.is_culled(),
            ?time,
            background = count(BACKGROUND_LIST),
            flats = count(&config.lod.flats_list),
            volumes = count(&config.lod.volumes_list),
            "Composed frame"
        );
    }
}
