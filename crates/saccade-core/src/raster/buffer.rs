//! [`Raster`] for `image` crate buffers with 8-bit samples

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};

use super::Raster;
use crate::error::{Error, Result};
use crate::region::{Rect, Size};

type Buffer<P> = ImageBuffer<P, Vec<u8>>;

fn filled<P>(size: Size, value: u8) -> Result<Buffer<P>>
where
    P: Pixel<Subpixel = u8>,
{
    if size.is_empty() {
        return Err(Error::InvalidDimension {
            width: size.width,
            height: size.height,
        });
    }
    let len = size.area() as usize * P::CHANNEL_COUNT as usize;
    ImageBuffer::from_raw(size.width, size.height, vec![value; len]).ok_or(
        Error::DimensionMismatch {
            expected: len,
            actual: len,
        },
    )
}

impl<P> Raster for Buffer<P>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn blank(&self, size: Size) -> Result<Self> {
        filled(size, 0)
    }

    fn full(&self, size: Size) -> Result<Self> {
        filled(size, u8::MAX)
    }

    fn sub_rect(&self, rect: &Rect) -> Result<Self> {
        if rect.is_empty() || !rect.fits_within(Raster::size(self)) {
            return Err(Error::OutOfBounds {
                x: rect.x,
                y: rect.y,
                w: rect.w,
                h: rect.h,
                width: ImageBuffer::width(self),
                height: ImageBuffer::height(self),
            });
        }
        Ok(imageops::crop_imm(
            self,
            rect.x as u32,
            rect.y as u32,
            rect.w as u32,
            rect.h as u32,
        )
        .to_image())
    }

    fn resize_to(&self, size: Size) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidDimension {
                width: size.width,
                height: size.height,
            });
        }
        Ok(imageops::resize(
            self,
            size.width,
            size.height,
            FilterType::Nearest,
        ))
    }

    fn resize_smooth_to(&self, size: Size) -> Result<Self> {
        if size.is_empty() {
            return Err(Error::InvalidDimension {
                width: size.width,
                height: size.height,
            });
        }
        Ok(imageops::resize(
            self,
            size.width,
            size.height,
            FilterType::Triangle,
        ))
    }

    fn or(&self, other: &Self) -> Result<Self> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::IncompatibleSizes(
                ImageBuffer::width(self),
                ImageBuffer::height(self),
                ImageBuffer::width(other),
                ImageBuffer::height(other),
            ));
        }
        let data: Vec<u8> = self
            .as_raw()
            .iter()
            .zip(other.as_raw())
            .map(|(a, b)| a | b)
            .collect();
        let len = data.len();
        ImageBuffer::from_raw(ImageBuffer::width(self), ImageBuffer::height(self), data).ok_or(
            Error::DimensionMismatch {
                expected: len,
                actual: len,
            },
        )
    }

    fn paste(self, src: &Self, x: i32, y: i32, mask: Option<&Self>) -> Result<Self> {
        if let Some(m) = mask
            && m.dimensions() != src.dimensions()
        {
            return Err(Error::IncompatibleSizes(
                ImageBuffer::width(src),
                ImageBuffer::height(src),
                ImageBuffer::width(m),
                ImageBuffer::height(m),
            ));
        }
        let (dw, dh) = (ImageBuffer::width(&self) as i32, ImageBuffer::height(&self) as i32);
        let mut dst = self;
        for (sx, sy, pixel) in src.enumerate_pixels() {
            let (dx, dy) = (x + sx as i32, y + sy as i32);
            if dx < 0 || dy < 0 || dx >= dw || dy >= dh {
                continue;
            }
            if let Some(m) = mask
                && m.get_pixel(sx, sy).channels().iter().all(|&s| s == 0)
            {
                continue;
            }
            dst.put_pixel(dx as u32, dy as u32, *pixel);
        }
        Ok(dst)
    }

    fn count_nonzero(&self) -> u64 {
        self.pixels()
            .filter(|p| p.channels().iter().any(|&s| s != 0))
            .count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_gray_image_raster() {
        let img = GrayImage::from_pixel(4, 4, Luma([7]));
        let sub = img.sub_rect(&Rect::new_unchecked(1, 1, 2, 2)).unwrap();
        assert_eq!(Raster::size(&sub), Size::new(2, 2));
        assert!(img.sub_rect(&Rect::new_unchecked(3, 3, 2, 2)).is_err());

        let canvas = img.blank(Size::new(5, 5)).unwrap();
        let mask = GrayImage::from_raw(2, 2, vec![0, 255, 0, 0]).unwrap();
        let out = canvas.paste(&sub, 0, 0, Some(&mask)).unwrap();
        assert_eq!(Raster::count_nonzero(&out), 1);
        assert_eq!(out.get_pixel(1, 0), &Luma([7]));

        let big = sub.resize_to(Size::new(6, 6)).unwrap();
        assert_eq!(Raster::count_nonzero(&big), 36);
    }
}
