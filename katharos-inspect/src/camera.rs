//! Camera frame capture
//!
//! The camera streamer serves MJPEG over a raw TCP socket: JPEG images
//! back to back, each running from an SOI marker (`FF D8`) to its
//! matching EOI marker (`FF D9`). Embedded thumbnails carry their own
//! SOI/EOI pair, so markers are matched by nesting depth. The stream is opened for one inspection only, so
//! the frames it has buffered since the last connect are stale and get
//! dropped before the one that is kept.

use std::io::{BufReader, ErrorKind, Read};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::error::InspectError;

const MARKER: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;

/// Frames past this size mean the stream is not MJPEG
pub const MAX_FRAME_BYTES: usize = 4 * 1024 * 1024;

/// One encoded JPEG image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(pub Vec<u8>);

impl Frame {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Something that can hand over a current frame
pub trait FrameSource {
    /// Skip `discard` buffered frames and return the next one
    fn grab_latest_frame(&mut self, discard: usize) -> Result<Frame, InspectError>;
}

impl<F: FrameSource + ?Sized> FrameSource for &mut F {
    fn grab_latest_frame(&mut self, discard: usize) -> Result<Frame, InspectError> {
        (**self).grab_latest_frame(discard)
    }
}

/// Splits an MJPEG byte stream into JPEG frames
pub struct MjpegReader<R> {
    reader: BufReader<R>,
    max_frame: usize,
}

impl<R: Read> MjpegReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            max_frame: MAX_FRAME_BYTES,
        }
    }

    pub fn with_max_frame(mut self, max_frame: usize) -> Self {
        self.max_frame = max_frame;
        self
    }

    /// Read the next complete frame, `Ok(None)` at end of stream
    ///
    /// Bytes before the first SOI are skipped, as is a frame cut short by
    /// the end of the stream.
    pub fn next_frame(&mut self) -> Result<Option<Frame>, InspectError> {
        if !self.seek_soi()? {
            return Ok(None);
        }

        let mut data = vec![MARKER, SOI];
        let mut depth = 1usize;
        let mut prev = 0u8;
        while let Some(byte) = self.read_byte()? {
            if data.len() >= self.max_frame {
                return Err(InspectError::FrameTooLarge {
                    limit: self.max_frame,
                });
            }
            data.push(byte);
            if prev != MARKER {
                prev = byte;
                continue;
            }
            match byte {
                SOI => depth += 1,
                EOI => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(Some(Frame(data)));
                    }
                }
                _ => {}
            }
            // A marker's second byte never starts another marker
            prev = if byte == MARKER { MARKER } else { 0 };
        }
        Ok(None)
    }

    /// Skip `discard` frames, then return the one after
    pub fn latest_frame(&mut self, discard: usize) -> Result<Frame, InspectError> {
        for _ in 0..discard {
            if self.next_frame()?.is_none() {
                return Err(InspectError::NoFrame);
            }
        }
        self.next_frame()?.ok_or(InspectError::NoFrame)
    }

    fn seek_soi(&mut self) -> Result<bool, InspectError> {
        let mut prev = 0u8;
        while let Some(byte) = self.read_byte()? {
            if prev == MARKER && byte == SOI {
                return Ok(true);
            }
            prev = byte;
        }
        Ok(false)
    }

    fn read_byte(&mut self) -> Result<Option<u8>, InspectError> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

/// MJPEG camera reached over TCP
#[derive(Debug, Clone)]
pub struct TcpCamera {
    addr: String,
    timeout: Duration,
}

impl TcpCamera {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    fn connect(&self) -> Result<TcpStream, InspectError> {
        let mut last_err = None;
        for addr in self.addr.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => {
                    stream.set_read_timeout(Some(self.timeout))?;
                    return Ok(stream);
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(last_err
            .unwrap_or_else(|| std::io::Error::new(ErrorKind::NotFound, "camera address did not resolve"))
            .into())
    }
}

impl FrameSource for TcpCamera {
    fn grab_latest_frame(&mut self, discard: usize) -> Result<Frame, InspectError> {
        let stream = self.connect()?;
        log::debug!("Camera connected at {}", self.addr);
        let frame = MjpegReader::new(stream).latest_frame(discard)?;
        log::debug!("Captured {} byte frame", frame.len());
        Ok(frame)
    }
}
