use gl::types::*;

use crate::{errors::ReadbackError, utils::utils::round_up};

use super::format::bytes_per_pixel;

/// Arguments of a single `glReadPixels` call, minus the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPixelsCall {
    pub x: GLint,
    pub y: GLint,
    pub width: GLsizei,
    pub height: GLsizei,
    pub format: GLenum,
    pub type_: GLenum,
}

impl ReadPixelsCall {
    pub fn new(
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
    ) -> Self {
        ReadPixelsCall {
            x,
            y,
            width,
            height,
            format,
            type_,
        }
    }

    pub fn bytes_per_pixel(&self) -> Result<usize, ReadbackError> {
        bytes_per_pixel(self.format, self.type_).ok_or(ReadbackError::UnsupportedFormat {
            format: self.format,
            type_: self.type_,
        })
    }

    /// Bytes GL writes for this call when rows start on `pack_alignment`
    /// boundaries. The last row is not padded.
    pub fn byte_len(&self, pack_alignment: GLint) -> Result<usize, ReadbackError> {
        if !matches!(pack_alignment, 1 | 2 | 4 | 8) {
            return Err(ReadbackError::InvalidAlignment(pack_alignment));
        }
        if self.width < 0 || self.height < 0 {
            return Err(ReadbackError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let bpp = self.bytes_per_pixel()?;
        if self.width == 0 || self.height == 0 {
            return Ok(0);
        }

        let too_large = ReadbackError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        let row = (self.width as usize).checked_mul(bpp).ok_or(too_large.clone())?;
        let stride = round_up(row, pack_alignment as usize).ok_or(too_large.clone())?;
        stride
            .checked_mul(self.height as usize - 1)
            .and_then(|padded| padded.checked_add(row))
            .ok_or(too_large)
    }
}
