use std::time::Instant;

use gl::types::*;
use log::{debug, warn};

use crate::errors::{GlError, ReadbackError};

use super::{backend::GlReadback, call::ReadPixelsCall};

/// What happens to the byte offset a caller passes along with a readback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetPolicy {
    /// Always read to offset 0. Existing callers rely on this.
    #[default]
    Discard,
    /// Use the caller's offset. Negative offsets still become 0.
    Forward,
}

impl OffsetPolicy {
    pub fn effective_offset(self, offset: GLint) -> usize {
        match self {
            OffsetPolicy::Discard => 0,
            OffsetPolicy::Forward => {
                if offset < 0 {
                    warn!("negative pack buffer offset {} replaced with 0", offset);
                    0
                } else {
                    offset as usize
                }
            }
        }
    }
}

/// Readback entry point exposed to the managed side.
///
/// A GL context has to be current on the calling thread, and for
/// [`read_pixels`](Self::read_pixels) a pixel pack buffer bound to it. Neither
/// is checked here.
pub struct PixelReadoutBinding<B: GlReadback> {
    backend: B,
    policy: OffsetPolicy,
    tracing: bool,
}

impl<B: GlReadback> PixelReadoutBinding<B> {
    pub fn new(backend: B, policy: OffsetPolicy) -> Self {
        PixelReadoutBinding {
            backend,
            policy,
            tracing: false,
        }
    }

    pub fn with_tracing(mut self, tracing: bool) -> Self {
        self.tracing = tracing;
        self
    }

    pub fn policy(&self) -> OffsetPolicy {
        self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Issues exactly one readback into the bound pack buffer. Nothing is
    /// validated and nothing is reported, GL's error flag is the only trace
    /// of a bad call.
    pub fn read_pixels(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
        offset: GLint,
    ) {
        let start = Instant::now();
        let call = ReadPixelsCall::new(x, y, width, height, format, type_);
        let effective_offset = self.policy.effective_offset(offset);
        self.backend.read_pixels_to_pack_buffer(call, effective_offset);
        if self.tracing {
            debug!(
                "read_pixels {:?} at offset {} (asked {}) took {:?}",
                call,
                effective_offset,
                offset,
                start.elapsed()
            );
        }
    }

    /// Reads a rectangle into a new buffer laid out with the context's current
    /// `GL_PACK_ALIGNMENT`.
    pub fn read_pixels_to_vec(
        &self,
        x: GLint,
        y: GLint,
        width: GLsizei,
        height: GLsizei,
        format: GLenum,
        type_: GLenum,
    ) -> Result<Vec<u8>, ReadbackError> {
        let start = Instant::now();
        let call = ReadPixelsCall::new(x, y, width, height, format, type_);
        let len = call.byte_len(self.backend.pack_alignment())?;
        let mut pixels = vec![0u8; len];
        if !self.backend.read_pixels_into(call, &mut pixels) {
            return Err(ReadbackError::Unavailable("glReadPixels"));
        }
        self.check_gl_error("glReadPixels")?;
        if self.tracing {
            debug!("read_pixels_to_vec {:?} ({} bytes) took {:?}", call, len, start.elapsed());
        }
        Ok(pixels)
    }

    pub fn check_gl_error(&self, op: &str) -> Result<(), GlError> {
        let code = self.backend.error();
        if code == gl::NO_ERROR {
            return Ok(());
        }
        let err = GlError::Call {
            op: op.to_owned(),
            code,
        };
        debug!("{}", err);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use proptest::prelude::*;

    use super::*;
    use crate::readback::backend::MockGlReadback;

    fn expect_one_read(mock: &mut MockGlReadback, call: ReadPixelsCall, offset: usize) {
        mock.expect_read_pixels_to_pack_buffer()
            .with(eq(call), eq(offset))
            .times(1)
            .return_const(true);
    }

    #[test]
    fn offset_is_dropped() {
        let mut mock = MockGlReadback::new();
        expect_one_read(
            &mut mock,
            ReadPixelsCall::new(0, 0, 4, 4, gl::RGBA, gl::UNSIGNED_BYTE),
            0,
        );
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
        binding.read_pixels(0, 0, 4, 4, gl::RGBA, gl::UNSIGNED_BYTE, 16);
    }

    #[test]
    fn empty_rect_still_issues_the_call() {
        let mut mock = MockGlReadback::new();
        expect_one_read(
            &mut mock,
            ReadPixelsCall::new(10, 20, 0, 0, gl::RGBA, gl::UNSIGNED_BYTE),
            0,
        );
        mock.expect_error().never();
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::default()).with_tracing(true);
        binding.read_pixels(10, 20, 0, 0, gl::RGBA, gl::UNSIGNED_BYTE, 0);
    }

    #[test]
    fn bad_enums_are_passed_along() {
        let mut mock = MockGlReadback::new();
        expect_one_read(&mut mock, ReadPixelsCall::new(-5, -5, -1, -1, 0xdead, 0xbeef), 0);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
        binding.read_pixels(-5, -5, -1, -1, 0xdead, 0xbeef, -3);
    }

    #[test]
    fn forward_keeps_positive_offsets() {
        let mut mock = MockGlReadback::new();
        let call = ReadPixelsCall::new(0, 0, 4, 4, gl::RGBA, gl::UNSIGNED_BYTE);
        expect_one_read(&mut mock, call, 16);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Forward);
        binding.read_pixels(0, 0, 4, 4, gl::RGBA, gl::UNSIGNED_BYTE, 16);
    }

    #[test]
    fn forward_clamps_negative_offsets() {
        assert_eq!(OffsetPolicy::Forward.effective_offset(-1), 0);
        assert_eq!(OffsetPolicy::Forward.effective_offset(GLint::MIN), 0);
        assert_eq!(OffsetPolicy::Forward.effective_offset(GLint::MAX), GLint::MAX as usize);
    }

    #[test]
    fn skipped_read_is_not_an_error() {
        let mut mock = MockGlReadback::new();
        mock.expect_read_pixels_to_pack_buffer()
            .times(1)
            .return_const(false);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
        binding.read_pixels(0, 0, 1, 1, gl::RGBA, gl::UNSIGNED_BYTE, 0);
    }

    #[test]
    fn read_to_vec_sizes_with_pack_alignment() {
        let mut mock = MockGlReadback::new();
        mock.expect_pack_alignment().return_const(4);
        mock.expect_read_pixels_into()
            .times(1)
            .returning(|call, pixels| {
                assert_eq!(call, ReadPixelsCall::new(1, 2, 3, 2, gl::RGB, gl::UNSIGNED_BYTE));
                pixels.fill(0x7f);
                true
            });
        mock.expect_error().times(1).return_const(gl::NO_ERROR);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);

        let pixels = binding
            .read_pixels_to_vec(1, 2, 3, 2, gl::RGB, gl::UNSIGNED_BYTE)
            .unwrap();
        assert_eq!(pixels.len(), 21);
        assert!(pixels.iter().all(|&b| b == 0x7f));
    }

    #[test]
    fn read_to_vec_reports_gl_errors() {
        let mut mock = MockGlReadback::new();
        mock.expect_pack_alignment().return_const(1);
        mock.expect_read_pixels_into().return_const(true);
        mock.expect_error().return_const(gl::INVALID_OPERATION);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);

        let err = binding
            .read_pixels_to_vec(0, 0, 2, 2, gl::RGBA, gl::UNSIGNED_BYTE)
            .unwrap_err();
        assert_eq!(
            err,
            ReadbackError::Gl(GlError::Call {
                op: "glReadPixels".to_owned(),
                code: gl::INVALID_OPERATION
            })
        );
    }

    #[test]
    fn read_to_vec_without_gl() {
        let mut mock = MockGlReadback::new();
        mock.expect_pack_alignment().return_const(4);
        mock.expect_read_pixels_into().return_const(false);
        mock.expect_error().never();
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);

        assert_eq!(
            binding.read_pixels_to_vec(0, 0, 2, 2, gl::RGBA, gl::UNSIGNED_BYTE),
            Err(ReadbackError::Unavailable("glReadPixels"))
        );
    }

    #[test]
    fn read_to_vec_rejects_unknown_formats_before_reading() {
        let mut mock = MockGlReadback::new();
        mock.expect_pack_alignment().return_const(4);
        mock.expect_read_pixels_into().never();
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);

        assert_eq!(
            binding.read_pixels_to_vec(0, 0, 2, 2, gl::DEPTH_COMPONENT, gl::UNSIGNED_BYTE),
            Err(ReadbackError::UnsupportedFormat {
                format: gl::DEPTH_COMPONENT,
                type_: gl::UNSIGNED_BYTE
            })
        );
    }

    #[test]
    fn check_gl_error_message() {
        let mut mock = MockGlReadback::new();
        mock.expect_error().times(1).return_const(gl::INVALID_ENUM);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
        let err = binding.check_gl_error("glBindFramebuffer").unwrap_err();
        assert_eq!(err.to_string(), "glBindFramebuffer: glError 0x500");

        let mut mock = MockGlReadback::new();
        mock.expect_error().times(1).return_const(gl::NO_ERROR);
        let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
        assert_eq!(binding.check_gl_error("glBindFramebuffer"), Ok(()));
    }

    proptest! {
        #[test]
        fn any_offset_reads_to_zero(
            x in any::<GLint>(),
            y in any::<GLint>(),
            width in 0..4096 as GLsizei,
            height in 0..4096 as GLsizei,
            offset in any::<GLint>(),
        ) {
            let mut mock = MockGlReadback::new();
            expect_one_read(
                &mut mock,
                ReadPixelsCall::new(x, y, width, height, gl::RGBA, gl::UNSIGNED_BYTE),
                0,
            );
            let binding = PixelReadoutBinding::new(mock, OffsetPolicy::Discard);
            binding.read_pixels(x, y, width, height, gl::RGBA, gl::UNSIGNED_BYTE, offset);
        }
    }
}
