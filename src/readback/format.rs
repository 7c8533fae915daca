use gl::types::GLenum;

use crate::constants::{
    K_GL_ALPHA, K_GL_BGRA_EXT, K_GL_HALF_FLOAT_OES, K_GL_LUMINANCE, K_GL_LUMINANCE_ALPHA,
};

fn packed_pixel_size(type_: GLenum) -> Option<usize> {
    match type_ {
        gl::UNSIGNED_SHORT_5_6_5 | gl::UNSIGNED_SHORT_4_4_4_4 | gl::UNSIGNED_SHORT_5_5_5_1 => {
            Some(2)
        }
        gl::UNSIGNED_INT_2_10_10_10_REV
        | gl::UNSIGNED_INT_10F_11F_11F_REV
        | gl::UNSIGNED_INT_5_9_9_9_REV => Some(4),
        _ => None,
    }
}

pub fn components(format: GLenum) -> Option<usize> {
    match format {
        K_GL_ALPHA | K_GL_LUMINANCE | gl::RED | gl::RED_INTEGER => Some(1),
        K_GL_LUMINANCE_ALPHA | gl::RG | gl::RG_INTEGER => Some(2),
        gl::RGB | gl::RGB_INTEGER => Some(3),
        gl::RGBA | gl::RGBA_INTEGER | K_GL_BGRA_EXT => Some(4),
        _ => None,
    }
}

pub fn component_size(type_: GLenum) -> Option<usize> {
    match type_ {
        gl::BYTE | gl::UNSIGNED_BYTE => Some(1),
        gl::SHORT | gl::UNSIGNED_SHORT | gl::HALF_FLOAT | K_GL_HALF_FLOAT_OES => Some(2),
        gl::INT | gl::UNSIGNED_INT | gl::FLOAT => Some(4),
        _ => None,
    }
}

/// Size of one pixel as `glReadPixels` writes it, or `None` for a pair we don't know.
/// Packed types carry the whole pixel, whatever the format.
pub fn bytes_per_pixel(format: GLenum, type_: GLenum) -> Option<usize> {
    if let Some(size) = packed_pixel_size(type_) {
        return Some(size);
    }
    Some(components(format)? * component_size(type_)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_bytes() {
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::UNSIGNED_BYTE), Some(4));
        assert_eq!(bytes_per_pixel(gl::RGB, gl::UNSIGNED_BYTE), Some(3));
        assert_eq!(bytes_per_pixel(K_GL_LUMINANCE_ALPHA, gl::UNSIGNED_BYTE), Some(2));
        assert_eq!(bytes_per_pixel(K_GL_ALPHA, gl::UNSIGNED_BYTE), Some(1));
    }

    #[test]
    fn wide_channels() {
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::FLOAT), Some(16));
        assert_eq!(bytes_per_pixel(gl::RGBA, K_GL_HALF_FLOAT_OES), Some(8));
        assert_eq!(bytes_per_pixel(gl::RG_INTEGER, gl::UNSIGNED_INT), Some(8));
        assert_eq!(bytes_per_pixel(gl::RED, gl::SHORT), Some(2));
    }

    #[test]
    fn packed_types_ignore_format() {
        assert_eq!(bytes_per_pixel(gl::RGB, gl::UNSIGNED_SHORT_5_6_5), Some(2));
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::UNSIGNED_SHORT_4_4_4_4), Some(2));
        assert_eq!(bytes_per_pixel(gl::RGBA, gl::UNSIGNED_INT_2_10_10_10_REV), Some(4));
    }

    #[test]
    fn unknown_pairs() {
        assert_eq!(bytes_per_pixel(gl::DEPTH_COMPONENT, gl::UNSIGNED_BYTE), None);
        assert_eq!(bytes_per_pixel(gl::RGBA, 0xdead), None);
        assert_eq!(bytes_per_pixel(0, 0), None);
    }
}
