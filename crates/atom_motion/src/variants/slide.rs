use atom_animation::{Easing, TransformOperations};
use atom_core::RelativePoint;

const SLIDE_SCALE: f64 = 0.8;
const TOP_RIGHT: RelativePoint = RelativePoint::relative(1.0, 0.0);

motion_variant! {
    /// Unfolds vertically while fading in.
    SlideUpInMotion {
        name: "slide-up-in",
        easing: Easing::EaseOutQuint,
        origin: None,
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(1.0, SLIDE_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    SlideUpOutMotion {
        name: "slide-up-out",
        easing: Easing::EaseInQuint,
        origin: None,
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(1.0, SLIDE_SCALE)),
    }
}

motion_variant! {
    /// Unfolds vertically from the bottom edge while fading in.
    SlideDownInMotion {
        name: "slide-down-in",
        easing: Easing::EaseOutQuint,
        origin: Some(RelativePoint::BOTTOM_RIGHT),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(1.0, SLIDE_SCALE), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    SlideDownOutMotion {
        name: "slide-down-out",
        easing: Easing::EaseInQuint,
        origin: Some(RelativePoint::BOTTOM_RIGHT),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(1.0, SLIDE_SCALE)),
    }
}

motion_variant! {
    /// Unfolds horizontally while fading in.
    SlideLeftInMotion {
        name: "slide-left-in",
        easing: Easing::EaseOutQuint,
        origin: None,
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(SLIDE_SCALE, 1.0), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    SlideLeftOutMotion {
        name: "slide-left-out",
        easing: Easing::EaseInQuint,
        origin: None,
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(SLIDE_SCALE, 1.0)),
    }
}

motion_variant! {
    /// Unfolds horizontally from the right edge while fading in.
    SlideRightInMotion {
        name: "slide-right-in",
        easing: Easing::EaseOutQuint,
        origin: Some(TOP_RIGHT),
        opacity: (0.0, 1.0),
        transform: (TransformOperations::scale(SLIDE_SCALE, 1.0), TransformOperations::IDENTITY),
    }
}

motion_variant! {
    SlideRightOutMotion {
        name: "slide-right-out",
        easing: Easing::EaseInQuint,
        origin: Some(TOP_RIGHT),
        opacity: (1.0, 0.0),
        transform: (TransformOperations::IDENTITY, TransformOperations::scale(SLIDE_SCALE, 1.0)),
    }
}
