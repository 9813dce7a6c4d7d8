//! Expression-driven emoji overlays for detected faces.
//!
//! Face detection is external: a [`detection::domain::face_detector::FaceDetector`]
//! supplies boxes and expression probabilities, the classifier maps them to an
//! [`classification::domain::expression::ExpressionCategory`], and the
//! compositor draws the matching overlay over each face.

pub mod assets {
    pub mod domain {
        pub mod overlay_assets;
    }
    pub mod infrastructure;
}

pub mod classification {
    pub mod domain {
        pub mod expression;
    }
}

pub mod compositing {
    pub mod domain {
        pub mod composite_error;
        pub mod face_compositor;
        pub mod overlay_geometry;
    }
    pub mod infrastructure;
}

pub mod detection {
    pub mod domain {
        pub mod face_detector;
    }
    pub mod infrastructure;
}

pub mod imaging {
    pub mod domain {
        pub mod image_reader;
        pub mod image_writer;
    }
    pub mod infrastructure;
}

pub mod pipeline {
    pub mod emojify_image_use_case;
    pub mod notifier;
}

pub mod shared {
    pub mod constants;
    pub mod face;
    pub mod frame;
}
