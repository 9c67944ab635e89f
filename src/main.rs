//! Leaves Diagram demo
//!
//! Headless version of the example screen: random preset, random colors,
//! animated reloads driven by a fixed 60 Hz frame loop, and a simulated tap.

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::DVec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    use leaves_diagram::math::polar_point;
    use leaves_diagram::{
        Color, DiagramConfig, LeavesDataSource, LeavesDelegate, LeavesDiagram, ReloadPhase,
        SelectionStyle,
    };

    const FRAME_DT: f64 = 1.0 / 60.0;
    const CONTENT_WIDTH: f64 = 390.0;
    const CONTENT_HEIGHT: f64 = 320.0;
    const DIAGRAM_RADIUS: f64 = 150.0;

    const PRESETS: [&[f64]; 4] = [
        &[0.54, 0.11, 0.1, 0.08, 0.06, 0.06, 0.05],
        &[50.0, 30.0, 20.0, 10.0, 5.0, 4.0, 4.0, 3.0, 2.0, 1.0],
        &[1.0, 1.0, 3.0, 5.0],
        &[0.25, 0.2, 0.2, 0.2, 0.15],
    ];

    /// Example screen state: which preset is shown and its palette
    struct Screen {
        rng: Pcg32,
        selected: usize,
        colors: Vec<Color>,
    }

    impl Screen {
        fn new(seed: u64) -> Self {
            Self {
                rng: Pcg32::seed_from_u64(seed),
                selected: 0,
                colors: Vec::new(),
            }
        }

        fn values(&self) -> &'static [f64] {
            PRESETS[self.selected]
        }

        /// Pick a new preset and palette
        fn shuffle(&mut self) {
            self.selected = self.rng.random_range(0..PRESETS.len());
            let count = self.values().len();
            self.colors = (0..count)
                .map(|_| Color::from_hex(self.rng.random_range(0x444444..=0xFFFFFF)))
                .collect();
            log::info!("Showing preset {} ({} leaves)", self.selected, count);
        }
    }

    impl LeavesDataSource for Screen {
        fn number_of_leaves(&self) -> usize {
            self.values().len()
        }

        fn color_for_leaf(&self, index: usize) -> Color {
            self.colors[index]
        }

        fn value_for_leaf(&self, index: usize) -> f64 {
            self.values()[index]
        }
    }

    impl LeavesDelegate for Screen {
        fn did_tap_leaf(&mut self, index: usize) {
            log::info!(
                "Selected leaf {}, percent for leaf: {}",
                index,
                self.values()[index]
            );
        }
    }

    fn reload(diagram: &mut LeavesDiagram, screen: &mut Screen, label: &'static str) {
        screen.shuffle();
        diagram.reload_data(Some(&*screen), true, move |finished| {
            log::info!("Reload '{}' finished: {}", label, finished);
        });
    }

    /// Step frames until the diagram is idle, logging phase changes
    fn run_frames(diagram: &mut LeavesDiagram, screen: &Screen, max_frames: usize) -> usize {
        let mut phase = diagram.phase();
        let mut frames = 0;
        while diagram.is_animating() && frames < max_frames {
            diagram.advance(FRAME_DT, Some(screen));
            frames += 1;
            if diagram.phase() != phase {
                phase = diagram.phase();
                log::info!("Frame {}: {:?}", frames, phase);
            }
        }
        frames
    }

    pub fn run(seed: u64) -> leaves_diagram::Result<()> {
        let config = DiagramConfig::with_radius(DIAGRAM_RADIUS)
            .with_selection_style(SelectionStyle::Scale(0.9));
        let mut diagram = LeavesDiagram::new(config)?;
        let mut screen = Screen::new(seed);

        diagram.layout(DVec2::new(CONTENT_WIDTH, CONTENT_HEIGHT), Some(&screen));

        reload(&mut diagram, &mut screen, "initial");
        let frames = run_frames(&mut diagram, &screen, usize::MAX);
        log::info!("Initial reload took {} frames", frames);

        // Pull to refresh, then refresh again before the first one lands
        reload(&mut diagram, &mut screen, "refresh");
        run_frames(&mut diagram, &screen, 5);
        reload(&mut diagram, &mut screen, "second refresh");
        run_frames(&mut diagram, &screen, usize::MAX);
        debug_assert_eq!(diagram.phase(), ReloadPhase::Idle);

        let vertices = diagram.vertices();
        log::info!(
            "{} leaves, {} vertices ({} bytes)",
            diagram.leaf_count(),
            vertices.len(),
            leaves_diagram::renderer::vertex::as_bytes(&vertices).len()
        );

        // Tap the middle of a random leaf
        let index = screen.rng.random_range(0..diagram.leaf_count().max(1));
        if let Some(leaf) = diagram.leaves().get(index) {
            let model = leaf.model();
            let mid = (model.start_angle + model.end_angle) / 2.0;
            let point = polar_point(diagram.center(), model.radius * 0.6, mid);
            diagram.touch_down(point);
            diagram.touch_up(point, Some(&mut screen));
        }

        // Tap the background
        let corner = DVec2::new(2.0, 2.0);
        if diagram.hit_test(corner).is_none() {
            log::info!("Background tap ignored");
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Leaves diagram demo starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2022);

    if let Err(e) = demo::run(seed) {
        log::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the embedding host on wasm
}
