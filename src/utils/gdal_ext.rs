// src/utils/gdal_ext.rs
use gdal::raster::{Buffer, GdalDataType, RasterBand};

use crate::error::{RecompressError, Result};

/// A GDAL buffer tagged with its pixel type.
pub enum TypedBuffer {
    U8(Buffer<u8>),
    U16(Buffer<u16>),
    I16(Buffer<i16>),
    U32(Buffer<u32>),
    I32(Buffer<i32>),
    F32(Buffer<f32>),
    F64(Buffer<f64>),
}

macro_rules! each_variant {
    ($value:expr, $buf:ident => $body:expr) => {
        match $value {
            TypedBuffer::U8($buf) => $body,
            TypedBuffer::U16($buf) => $body,
            TypedBuffer::I16($buf) => $body,
            TypedBuffer::U32($buf) => $body,
            TypedBuffer::I32($buf) => $body,
            TypedBuffer::F32($buf) => $body,
            TypedBuffer::F64($buf) => $body,
        }
    };
}

impl TypedBuffer {
    /// Reads the whole band in its native pixel type.
    pub fn read_band(band: &RasterBand) -> Result<Self> {
        let (width, height) = band.size();
        let window = (0, 0);
        let size = (width, height);

        let buffer = match band.band_type() {
            GdalDataType::UInt8 => Self::U8(band.read_as::<u8>(window, size, size, None)?),
            GdalDataType::UInt16 => Self::U16(band.read_as::<u16>(window, size, size, None)?),
            GdalDataType::Int16 => Self::I16(band.read_as::<i16>(window, size, size, None)?),
            GdalDataType::UInt32 => Self::U32(band.read_as::<u32>(window, size, size, None)?),
            GdalDataType::Int32 => Self::I32(band.read_as::<i32>(window, size, size, None)?),
            GdalDataType::Float32 => Self::F32(band.read_as::<f32>(window, size, size, None)?),
            GdalDataType::Float64 => Self::F64(band.read_as::<f64>(window, size, size, None)?),
            other => return Err(RecompressError::UnsupportedDataType(other.name())),
        };

        Ok(buffer)
    }

    /// (width, height)
    pub fn shape(&self) -> (usize, usize) {
        each_variant!(self, buf => buf.shape())
    }

    pub fn len(&self) -> usize {
        each_variant!(self, buf => buf.data().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn data_type(&self) -> GdalDataType {
        match self {
            TypedBuffer::U8(_) => GdalDataType::UInt8,
            TypedBuffer::U16(_) => GdalDataType::UInt16,
            TypedBuffer::I16(_) => GdalDataType::Int16,
            TypedBuffer::U32(_) => GdalDataType::UInt32,
            TypedBuffer::I32(_) => GdalDataType::Int32,
            TypedBuffer::F32(_) => GdalDataType::Float32,
            TypedBuffer::F64(_) => GdalDataType::Float64,
        }
    }
}
