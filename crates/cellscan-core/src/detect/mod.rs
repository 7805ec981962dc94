pub mod annotate;
pub mod contour;
pub mod hsv;
pub mod morphology;
pub mod threshold;

use ndarray::Array2;
use tracing::debug;

use crate::consts::CLOSE_ITERATIONS;
use crate::frame::Frame;
use crate::params::DetectParams;

pub use contour::Contour;

/// Everything one pipeline invocation produces. Immutable once returned.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Raw HSV range-threshold mask.
    pub mask: Array2<bool>,
    /// Mask after morphological closing.
    pub closed: Array2<bool>,
    /// Copy of the input frame with boundaries and index labels drawn in.
    pub annotated: Frame,
    /// Area-retained contours, in boundary-scan order.
    pub contours: Vec<Contour>,
}

impl Detection {
    /// Number of retained contours.
    pub fn count(&self) -> usize {
        self.contours.len()
    }
}

/// Run the full detection pipeline on one frame.
///
/// HSV conversion -> range threshold -> morphological closing -> outer
/// contour extraction -> area filter -> annotation. Pure function of
/// (frame, params); identical inputs yield bit-identical masks.
pub fn detect(frame: &Frame, params: &DetectParams) -> Detection {
    let hsv = hsv::bgr_to_hsv(frame);
    let mask = threshold::in_range(&hsv, params);

    let diameter = morphology::coerce_kernel_size(params.kernel_size);
    let closed = morphology::close(&mask, diameter, CLOSE_ITERATIONS);

    let contours: Vec<Contour> = contour::find_external_contours(&closed)
        .into_iter()
        .filter(|c| params.min_area <= c.area && c.area <= params.max_area)
        .collect();

    debug!(
        kernel = diameter,
        retained = contours.len(),
        "Detection pipeline complete"
    );

    let annotated = annotate::annotate(frame, &contours);

    Detection {
        mask,
        closed,
        annotated,
        contours,
    }
}
