use crate::constants::{CSS_LENGTH_PRECISION, CSS_SCALE_PRECISION};
use gallery_core::{CardPose, RingTransform};
use glam::Vec3;

// CSS transform strings. Component order matches the usual
// translate -> rotate -> rotateY -> rotateX -> scale composition.

#[inline]
fn len(v: f32) -> String {
    format!("{:.*}", CSS_LENGTH_PRECISION, v)
}

pub fn card_transform(pose: &CardPose) -> String {
    format!(
        "perspective({}px) translate3d({}px, {}px, 0px) rotate({}deg) rotateY({}deg) scale({:.*})",
        len(pose.perspective),
        len(pose.position.x),
        len(pose.position.y),
        len(pose.rotation_deg),
        len(pose.rotation_y_deg),
        CSS_SCALE_PRECISION,
        pose.scale
    )
}

pub fn ring_transform(ring: &RingTransform) -> String {
    format!(
        "translate3d({}px, {}px, 0px) rotate({}deg) scale({:.*})",
        len(ring.translate.x),
        len(ring.translate.y),
        len(ring.rotation_deg),
        CSS_SCALE_PRECISION,
        ring.scale
    )
}

/// Container tilt, `tilt` in degrees around x, y and z.
pub fn tilt_transform(tilt: Vec3) -> String {
    format!(
        "rotateZ({}deg) rotateY({}deg) rotateX({}deg)",
        len(tilt.z),
        len(tilt.y),
        len(tilt.x)
    )
}

pub fn word_transform(offset_pct: f32) -> String {
    format!("translateY({}%)", len(offset_pct))
}

pub fn opacity(value: f32) -> String {
    format!("{:.*}", CSS_SCALE_PRECISION, value.clamp(0.0, 1.0))
}
