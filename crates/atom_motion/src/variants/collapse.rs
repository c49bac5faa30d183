use atom_animation::{Easing, TransformOperations};
use atom_core::RelativePoint;

const EXPAND_FROM: f64 = 0.01;

const LEFT_ANCHOR: RelativePoint = RelativePoint::relative(1.0, 0.5);
const RIGHT_ANCHOR: RelativePoint = RelativePoint::relative(0.0, 0.5);
const TOP_ANCHOR: RelativePoint = RelativePoint::relative(0.5, 1.0);
const BOTTOM_ANCHOR: RelativePoint = RelativePoint::relative(0.5, 0.0);

motion_variant! {
    /// Folds a control towards its top edge.
    CollapseTopMotion {
        name: "collapse-top",
        easing: Easing::EaseOutCubic,
        origin: Some(TOP_ANCHOR),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(1.0, 0.0)),
    }
}

motion_variant! {
    CollapseBottomMotion {
        name: "collapse-bottom",
        easing: Easing::EaseOutCubic,
        origin: Some(BOTTOM_ANCHOR),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(1.0, 0.0)),
    }
}

motion_variant! {
    CollapseLeftMotion {
        name: "collapse-left",
        easing: Easing::EaseOutCubic,
        origin: Some(LEFT_ANCHOR),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(0.0, 1.0)),
    }
}

motion_variant! {
    CollapseRightMotion {
        name: "collapse-right",
        easing: Easing::EaseOutCubic,
        origin: Some(RIGHT_ANCHOR),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(0.0, 1.0)),
    }
}

motion_variant! {
    /// Unfolds a control from its top edge.
    ExpandTopMotion {
        name: "expand-top",
        easing: Easing::EaseInCubic,
        origin: Some(TOP_ANCHOR),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(1.0, EXPAND_FROM), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ExpandBottomMotion {
        name: "expand-bottom",
        easing: Easing::EaseInCubic,
        origin: Some(BOTTOM_ANCHOR),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(1.0, EXPAND_FROM), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ExpandLeftMotion {
        name: "expand-left",
        easing: Easing::EaseInCubic,
        origin: Some(LEFT_ANCHOR),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(EXPAND_FROM, 1.0), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ExpandRightMotion {
        name: "expand-right",
        easing: Easing::EaseInCubic,
        origin: Some(RIGHT_ANCHOR),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(EXPAND_FROM, 1.0), TransformOperations::IDENTITY),
    }
}
