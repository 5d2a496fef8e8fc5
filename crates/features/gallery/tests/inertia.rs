use arkiv_gallery::{DragPhase, DragState};
use arkiv_kernel::domain::config::GalleryMotion;
use proptest::prelude::*;

proptest! {
    #[test]
    fn inertia_matches_the_geometric_series(
        drag_distance in 1.0f64..500.0,
        damping in 0.5f64..0.99,
    ) {
        let motion = GalleryMotion { damping, ..GalleryMotion::default() };
        let mut drag = DragState::default();

        drag.pointer_down(drag_distance);
        drag.pointer_move(0.0, &motion);
        let offset0 = drag.offset();
        let v0 = drag_distance * motion.drag_sensitivity;
        drag.pointer_up(&motion);

        let mut n = 0u32;
        while drag.phase() == DragPhase::Coasting {
            drag.inertia_tick(&motion);
            n += 1;
            prop_assert!(n < 10_000, "velocity must fall below epsilon");
        }

        // offset after n frames follows offset0 + v0 (1 - d^n) / (1 - d).
        let expected = v0.mul_add((1.0 - damping.powi(n.cast_signed())) / (1.0 - damping), offset0);
        prop_assert!((drag.offset() - expected).abs() < 1e-9);

        // The asymptote bounds every partial sum.
        let limit = offset0 + v0 / (1.0 - damping);
        prop_assert!(drag.offset() <= limit + 1e-9);
    }

    #[test]
    fn coasting_offset_is_monotone(drag_distance in 1.0f64..500.0) {
        let motion = GalleryMotion::default();
        let mut drag = DragState::default();

        drag.pointer_down(drag_distance);
        drag.pointer_move(0.0, &motion);
        drag.pointer_up(&motion);

        let mut previous = drag.offset();
        while drag.inertia_tick(&motion) {
            prop_assert!(drag.offset() >= previous);
            previous = drag.offset();
        }
    }
}
