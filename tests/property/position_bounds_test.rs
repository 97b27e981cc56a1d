//! Property-based tests for affordance placement.
//!
//! For any selection inside a viewport wide enough to hold the button plus
//! both margins, the button stays within the horizontal margins and sits
//! either above or below the selection, never over it.

use proptest::prelude::*;

use highlight_saver::services::affordance_renderer::compute_position;
use highlight_saver::types::affordance::{SelectionRect, Viewport};
use highlight_saver::types::settings::LayoutSettings;

fn arb_case() -> impl Strategy<Value = (Viewport, SelectionRect)> {
    (130.0f64..2560.0, 200.0f64..1600.0).prop_flat_map(|(vw, vh)| {
        (0.0f64..vw, 0.0f64..vh).prop_flat_map(move |(left, top)| {
            (0.0f64..=(vw - left), 0.0f64..=(vh - top).max(0.0)).prop_map(move |(w, h)| {
                (
                    Viewport {
                        width: vw,
                        height: vh,
                    },
                    SelectionRect::new(left, top, w, h),
                )
            })
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn stays_within_horizontal_margins((viewport, rect) in arb_case()) {
        let layout = LayoutSettings::default();
        let pos = compute_position(&rect, &viewport, &layout);

        prop_assert!(pos.left >= layout.margin - 1e-9, "left {} < margin", pos.left);
        prop_assert!(
            pos.left + layout.width <= viewport.width - layout.margin + 1e-9,
            "right edge {} past viewport {}",
            pos.left + layout.width,
            viewport.width
        );
    }

    #[test]
    fn never_overlaps_selection_vertically((viewport, rect) in arb_case()) {
        let layout = LayoutSettings::default();
        let pos = compute_position(&rect, &viewport, &layout);

        let above = pos.top + layout.height + layout.offset <= rect.top + 1e-9;
        let below = pos.top >= rect.bottom + layout.offset - 1e-9;
        prop_assert!(above || below, "top {} overlaps rect {:?}", pos.top, rect);
    }

    #[test]
    fn prefers_above_when_room((viewport, rect) in arb_case()) {
        let layout = LayoutSettings::default();
        let pos = compute_position(&rect, &viewport, &layout);

        let room_above = rect.top - layout.height - layout.offset >= layout.margin;
        if room_above {
            prop_assert_eq!(pos.top, rect.top - layout.height - layout.offset);
        } else {
            prop_assert_eq!(pos.top, rect.bottom + layout.offset);
        }
    }
}
