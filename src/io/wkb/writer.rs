//! EWKB encoding of any [`GeometryFamily`], mirroring [`super::reader`].
//!
//! Values are always written big endian, whatever byte order they were read with.

use std::marker::PhantomData;

use futures::future::{BoxFuture, FutureExt};
use log::trace;

use crate::error::{EwkbError, Result};
use crate::family::GeometryFamily;
use crate::geo_traits::CoordTrait;
use crate::io::buffer::WriteBuffer;
use crate::io::channel::{Channel, IoMode};
use crate::io::wkb::common::{WKBType, WKB_BYTE_ORDER};
use crate::io::wkb::options::CodecOptions;

fn missing_shape(wkb_type: WKBType) -> EwkbError {
    EwkbError::Unrepresentable(format!(
        "value tagged {wkb_type:?} has no {wkb_type:?} data"
    ))
}

fn wkb_count(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| EwkbError::Overflow)
}

/// Encodes geometries into a [`WriteBuffer`], flushing it whenever a primitive does not fit.
///
/// Bytes may remain buffered after a geometry is written; call [`WriteBuffer::flush`] to hand
/// them to the channel.
pub struct WKBWriter<'a, F, C> {
    sink: &'a mut WriteBuffer<C>,
    mode: IoMode,
    max_depth: usize,
    family: PhantomData<fn() -> F>,
}

impl<'a, F: GeometryFamily, C: Channel> WKBWriter<'a, F, C> {
    pub fn new(sink: &'a mut WriteBuffer<C>, mode: IoMode, options: &CodecOptions) -> Self {
        Self {
            sink,
            mode,
            max_depth: options.max_depth,
            family: PhantomData,
        }
    }

    /// Write a full geometry: header, SRID when nonzero, and body.
    pub fn write_geometry<'b>(&'b mut self, geom: &'b F::Geometry) -> BoxFuture<'b, Result<()>> {
        self.write_nested(geom, 0)
    }

    fn write_nested<'b>(
        &'b mut self,
        geom: &'b F::Geometry,
        depth: usize,
    ) -> BoxFuture<'b, Result<()>> {
        async move {
            if depth > self.max_depth {
                return Err(EwkbError::NestingTooDeep(self.max_depth));
            }
            let wkb_type = F::shape_tag(geom);
            let srid = F::srid(geom);
            trace!("writing {wkb_type:?} (srid {srid})");

            self.put_u8(WKB_BYTE_ORDER.into()).await?;
            self.put_u32(wkb_type.type_word(srid != 0)).await?;
            if srid != 0 {
                self.put_u32(srid).await?;
            }

            match wkb_type {
                WKBType::Point => {
                    let coord = F::point(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_coord(coord).await?;
                }
                WKBType::LineString => {
                    let points = F::line_string(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_coords(points).await?;
                }
                WKBType::Polygon => {
                    let rings = F::polygon(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_rings(rings).await?;
                }
                WKBType::MultiPoint => {
                    let points = F::multi_point(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_u32(wkb_count(points.len())?).await?;
                    for point in points {
                        self.put_member_header(WKBType::Point).await?;
                        self.put_coord(point).await?;
                    }
                }
                WKBType::MultiLineString => {
                    let lines =
                        F::multi_line_string(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_u32(wkb_count(lines.len())?).await?;
                    for line in lines {
                        self.put_member_header(WKBType::LineString).await?;
                        self.put_coords(line).await?;
                    }
                }
                WKBType::MultiPolygon => {
                    let polygons = F::multi_polygon(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_u32(wkb_count(polygons.len())?).await?;
                    for rings in polygons {
                        self.put_member_header(WKBType::Polygon).await?;
                        self.put_rings(rings).await?;
                    }
                }
                WKBType::GeometryCollection => {
                    let members = F::members(geom).ok_or_else(|| missing_shape(wkb_type))?;
                    self.put_u32(wkb_count(members.len())?).await?;
                    for member in members {
                        self.write_nested(member, depth + 1).await?;
                    }
                }
            }
            Ok(())
        }
        .boxed()
    }

    async fn put_u8(&mut self, value: u8) -> Result<()> {
        if self.sink.free_space() < 1 {
            self.sink.flush(self.mode).await?;
        }
        self.sink.write_u8(value);
        Ok(())
    }

    async fn put_u32(&mut self, value: u32) -> Result<()> {
        if self.sink.free_space() < 4 {
            self.sink.flush(self.mode).await?;
        }
        self.sink.write_u32(value, WKB_BYTE_ORDER);
        Ok(())
    }

    async fn put_f64(&mut self, value: f64) -> Result<()> {
        if self.sink.free_space() < 8 {
            self.sink.flush(self.mode).await?;
        }
        self.sink.write_f64(value, WKB_BYTE_ORDER);
        Ok(())
    }

    /// The byte order and bare shape preceding each member of a Multi* geometry.
    async fn put_member_header(&mut self, wkb_type: WKBType) -> Result<()> {
        self.put_u8(WKB_BYTE_ORDER.into()).await?;
        self.put_u32(wkb_type.into()).await
    }

    async fn put_coord(&mut self, coord: &F::Coord) -> Result<()> {
        self.put_f64(coord.x()).await?;
        self.put_f64(coord.y()).await
    }

    async fn put_coords(&mut self, coords: &[F::Coord]) -> Result<()> {
        self.put_u32(wkb_count(coords.len())?).await?;
        for coord in coords {
            self.put_coord(coord).await?;
        }
        Ok(())
    }

    async fn put_rings(&mut self, rings: &[Vec<F::Coord>]) -> Result<()> {
        self.put_u32(wkb_count(rings.len())?).await?;
        for ring in rings {
            self.put_coords(ring).await?;
        }
        Ok(())
    }
}

/// Encode `geom` into `sink`. Bytes may remain buffered in `sink` afterwards.
pub async fn write_geometry<F: GeometryFamily, C: Channel>(
    geom: &F::Geometry,
    sink: &mut WriteBuffer<C>,
    mode: IoMode,
    options: &CodecOptions,
) -> Result<()> {
    WKBWriter::<F, C>::new(sink, mode, options)
        .write_geometry(geom)
        .await
}

fn coords_wkb_size(num_coords: usize) -> usize {
    4 + 16 * num_coords
}

fn rings_wkb_size<C>(rings: &[Vec<C>]) -> usize {
    4 + rings
        .iter()
        .map(|ring| coords_wkb_size(ring.len()))
        .sum::<usize>()
}

/// The exact number of bytes [`write_geometry`] produces for `geom`.
pub fn geometry_wkb_size<F: GeometryFamily>(
    geom: &F::Geometry,
    options: &CodecOptions,
) -> Result<usize> {
    nested_wkb_size::<F>(geom, 0, options.max_depth)
}

fn nested_wkb_size<F: GeometryFamily>(
    geom: &F::Geometry,
    depth: usize,
    max_depth: usize,
) -> Result<usize> {
    if depth > max_depth {
        return Err(EwkbError::NestingTooDeep(max_depth));
    }
    let wkb_type = F::shape_tag(geom);
    let header = if F::srid(geom) != 0 { 1 + 4 + 4 } else { 1 + 4 };
    let body = match wkb_type {
        WKBType::Point => {
            F::point(geom).ok_or_else(|| missing_shape(wkb_type))?;
            16
        }
        WKBType::LineString => {
            coords_wkb_size(F::line_string(geom).ok_or_else(|| missing_shape(wkb_type))?.len())
        }
        WKBType::Polygon => rings_wkb_size(F::polygon(geom).ok_or_else(|| missing_shape(wkb_type))?),
        WKBType::MultiPoint => {
            let points = F::multi_point(geom).ok_or_else(|| missing_shape(wkb_type))?;
            4 + points.len() * (1 + 4 + 16)
        }
        WKBType::MultiLineString => {
            let lines = F::multi_line_string(geom).ok_or_else(|| missing_shape(wkb_type))?;
            4 + lines
                .iter()
                .map(|line| 1 + 4 + coords_wkb_size(line.len()))
                .sum::<usize>()
        }
        WKBType::MultiPolygon => {
            let polygons = F::multi_polygon(geom).ok_or_else(|| missing_shape(wkb_type))?;
            4 + polygons
                .iter()
                .map(|rings| 1 + 4 + rings_wkb_size(rings))
                .sum::<usize>()
        }
        WKBType::GeometryCollection => {
            let members = F::members(geom).ok_or_else(|| missing_shape(wkb_type))?;
            let mut sum = 4;
            for member in members {
                sum += nested_wkb_size::<F>(member, depth + 1, max_depth)?;
            }
            sum
        }
    };
    Ok(header + body)
}

#[cfg(test)]
mod test {
    use futures::executor::block_on;

    use super::*;
    use crate::geometry::{Coord, Geometry, Planar, Ring};
    use crate::io::channel::MemoryChannel;

    /// Planar values whose shape tag always claims Polygon.
    struct Mislabeled;

    impl GeometryFamily for Mislabeled {
        type Coord = Coord;
        type Geometry = Geometry;

        fn make_coord(x: f64, y: f64) -> Coord {
            Planar::make_coord(x, y)
        }

        fn make_point(x: f64, y: f64) -> Geometry {
            Planar::make_point(x, y)
        }

        fn make_line_string(points: Vec<Coord>) -> Geometry {
            Planar::make_line_string(points)
        }

        fn make_polygon(rings: Vec<Ring>) -> Geometry {
            Planar::make_polygon(rings)
        }

        fn make_multi_point(points: Vec<Coord>) -> Geometry {
            Planar::make_multi_point(points)
        }

        fn make_multi_line_string(lines: Vec<Vec<Coord>>) -> Geometry {
            Planar::make_multi_line_string(lines)
        }

        fn make_multi_polygon(polygons: Vec<Vec<Ring>>) -> Geometry {
            Planar::make_multi_polygon(polygons)
        }

        fn make_collection(members: Vec<Geometry>) -> Geometry {
            Planar::make_collection(members)
        }

        fn with_srid(geom: Geometry, srid: u32) -> Geometry {
            Planar::with_srid(geom, srid)
        }

        fn srid(geom: &Geometry) -> u32 {
            Planar::srid(geom)
        }

        fn shape_tag(_: &Geometry) -> WKBType {
            WKBType::Polygon
        }

        fn point(geom: &Geometry) -> Option<&Coord> {
            Planar::point(geom)
        }

        fn line_string(geom: &Geometry) -> Option<&[Coord]> {
            Planar::line_string(geom)
        }

        fn polygon(geom: &Geometry) -> Option<&[Ring]> {
            Planar::polygon(geom)
        }

        fn multi_point(geom: &Geometry) -> Option<&[Coord]> {
            Planar::multi_point(geom)
        }

        fn multi_line_string(geom: &Geometry) -> Option<&[Vec<Coord>]> {
            Planar::multi_line_string(geom)
        }

        fn multi_polygon(geom: &Geometry) -> Option<&[Vec<Ring>]> {
            Planar::multi_polygon(geom)
        }

        fn members(geom: &Geometry) -> Option<&[Geometry]> {
            Planar::members(geom)
        }
    }

    fn nested(levels: usize) -> Geometry {
        (0..levels).fold(Geometry::collection(vec![]), |inner, _| {
            Geometry::collection(vec![inner])
        })
    }

    #[test]
    fn tag_without_matching_data_is_unrepresentable() {
        let geom = Geometry::point(1., 2.);
        let options = CodecOptions::default();
        assert!(matches!(
            geometry_wkb_size::<Mislabeled>(&geom, &options),
            Err(EwkbError::Unrepresentable(_))
        ));

        let mut sink = WriteBuffer::new(MemoryChannel::default());
        let err = block_on(write_geometry::<Mislabeled, _>(
            &geom,
            &mut sink,
            IoMode::Blocking,
            &options,
        ))
        .unwrap_err();
        assert!(matches!(err, EwkbError::Unrepresentable(_)));

        // A real polygon passes through the same family unchanged.
        let polygon = Geometry::polygon(vec![vec![]]);
        assert_eq!(geometry_wkb_size::<Mislabeled>(&polygon, &options).unwrap(), 13);
    }

    #[test]
    fn nesting_deeper_than_max_depth_is_rejected() {
        let options = CodecOptions {
            max_depth: 3,
            ..Default::default()
        };
        assert_eq!(geometry_wkb_size::<Planar>(&nested(3), &options).unwrap(), 4 * 9);
        assert!(matches!(
            geometry_wkb_size::<Planar>(&nested(4), &options),
            Err(EwkbError::NestingTooDeep(3))
        ));

        let mut sink = WriteBuffer::new(MemoryChannel::default());
        block_on(write_geometry::<Planar, _>(&nested(3), &mut sink, IoMode::Blocking, &options))
            .unwrap();
        let err = block_on(write_geometry::<Planar, _>(
            &nested(200),
            &mut sink,
            IoMode::Blocking,
            &CodecOptions::default(),
        ))
        .unwrap_err();
        assert!(matches!(err, EwkbError::NestingTooDeep(_)));
    }
}
