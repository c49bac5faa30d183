use atom_animation::{Easing, TransformOperations};
use atom_core::RelativePoint;

const ZOOM_SCALE: f64 = 0.2;
const ZOOM_BIG_SCALE: f64 = 0.8;

const TOP_CENTER: RelativePoint = RelativePoint::relative(0.5, 0.0);
const BOTTOM_CENTER: RelativePoint = RelativePoint::relative(0.5, 1.0);
const LEFT_CENTER: RelativePoint = RelativePoint::relative(0.0, 0.5);
const RIGHT_CENTER: RelativePoint = RelativePoint::relative(1.0, 0.5);

motion_variant! {
    ZoomInMotion {
        name: "zoom-in",
        easing: Easing::EaseOutCirc,
        origin: None,
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomOutMotion {
        name: "zoom-out",
        easing: Easing::EaseInOutCirc,
        origin: None,
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_SCALE)),
    }
}

motion_variant! {
    /// Grows from the same small scale as `ZoomInMotion`; only the exit
    /// stops short at the larger scale.
    ZoomBigInMotion {
        name: "zoom-big-in",
        easing: Easing::EaseOutCirc,
        origin: None,
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomBigOutMotion {
        name: "zoom-big-out",
        easing: Easing::EaseInOutCirc,
        origin: None,
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_BIG_SCALE)),
    }
}

motion_variant! {
    /// Grows out of the top edge.
    ZoomUpInMotion {
        name: "zoom-up-in",
        easing: Easing::EaseOutCirc,
        origin: Some(TOP_CENTER),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_BIG_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomUpOutMotion {
        name: "zoom-up-out",
        easing: Easing::EaseInOutCirc,
        origin: Some(TOP_CENTER),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_BIG_SCALE)),
    }
}

motion_variant! {
    /// Grows out of the bottom edge.
    ZoomDownInMotion {
        name: "zoom-down-in",
        easing: Easing::EaseOutCirc,
        origin: Some(BOTTOM_CENTER),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_BIG_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomDownOutMotion {
        name: "zoom-down-out",
        easing: Easing::EaseInOutCirc,
        origin: Some(BOTTOM_CENTER),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_BIG_SCALE)),
    }
}

motion_variant! {
    /// Grows out of the left edge.
    ZoomLeftInMotion {
        name: "zoom-left-in",
        easing: Easing::EaseOutCirc,
        origin: Some(LEFT_CENTER),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_BIG_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomLeftOutMotion {
        name: "zoom-left-out",
        easing: Easing::EaseInOutCirc,
        origin: Some(LEFT_CENTER),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_BIG_SCALE)),
    }
}

motion_variant! {
    /// Grows out of the right edge.
    ZoomRightInMotion {
        name: "zoom-right-in",
        easing: Easing::EaseOutCirc,
        origin: Some(RIGHT_CENTER),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale_uniform(ZOOM_BIG_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    ZoomRightOutMotion {
        name: "zoom-right-out",
        easing: Easing::EaseInOutCirc,
        origin: Some(RIGHT_CENTER),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale_uniform(ZOOM_BIG_SCALE)),
    }
}
