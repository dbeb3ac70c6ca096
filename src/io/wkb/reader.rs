//! Recursive-descent EWKB decoding into any [`GeometryFamily`].

use std::marker::PhantomData;

use futures::future::{BoxFuture, FutureExt};
use log::{trace, warn};

use crate::error::{EwkbError, Result};
use crate::family::GeometryFamily;
use crate::io::buffer::ReadBuffer;
use crate::io::channel::{Channel, IoMode};
use crate::io::wkb::common::{parse_type_word, Endianness, WKBType};
use crate::io::wkb::options::CodecOptions;

/// Upper bound on elements reserved up front from a count read off the wire.
const MAX_PREALLOCATE: usize = 4096;

/// Decodes one geometry at a time from a [`ReadBuffer`].
///
/// Each call to [`WKBReader::read_geometry`] consumes exactly the bytes of one value. The source
/// must be positioned at the start of a geometry header.
pub struct WKBReader<'a, F, C> {
    source: &'a mut ReadBuffer<C>,
    mode: IoMode,
    strict_member_headers: bool,
    max_depth: usize,
    family: PhantomData<fn() -> F>,
}

impl<'a, F: GeometryFamily, C: Channel> WKBReader<'a, F, C> {
    pub fn new(source: &'a mut ReadBuffer<C>, mode: IoMode, options: &CodecOptions) -> Self {
        Self {
            source,
            mode,
            strict_member_headers: options.strict_member_headers,
            max_depth: options.max_depth,
            family: PhantomData,
        }
    }

    /// Read a full geometry: header, optional SRID and body.
    pub fn read_geometry(&mut self) -> BoxFuture<'_, Result<F::Geometry>> {
        self.read_nested(0)
    }

    /// Read a geometry enclosed by `depth` collections.
    fn read_nested(&mut self, depth: usize) -> BoxFuture<'_, Result<F::Geometry>> {
        async move {
            if depth > self.max_depth {
                return Err(EwkbError::NestingTooDeep(self.max_depth));
            }
            self.source.ensure(5, self.mode).await?;
            let byte_order = Endianness::from_marker(self.source.read_u8())?;
            let word = self.source.read_u32(byte_order);
            let (wkb_type, has_srid) = parse_type_word(word)?;

            let srid = if has_srid {
                self.source.ensure(4, self.mode).await?;
                self.source.read_u32(byte_order)
            } else {
                0
            };
            trace!("reading {wkb_type:?} ({byte_order:?}, srid {srid})");

            let geom = self.read_body(wkb_type, byte_order, depth).await?;
            Ok(F::with_srid(geom, srid))
        }
        .boxed()
    }

    async fn read_body(
        &mut self,
        wkb_type: WKBType,
        byte_order: Endianness,
        depth: usize,
    ) -> Result<F::Geometry> {
        let geom = match wkb_type {
            WKBType::Point => {
                self.source.ensure(16, self.mode).await?;
                let x = self.source.read_f64(byte_order);
                let y = self.source.read_f64(byte_order);
                F::make_point(x, y)
            }
            WKBType::LineString => F::make_line_string(self.read_coords(byte_order).await?),
            WKBType::Polygon => F::make_polygon(self.read_rings(byte_order).await?),
            WKBType::MultiPoint => {
                let num_points = self.read_count(byte_order).await?;
                let mut points = Vec::with_capacity(num_points.min(MAX_PREALLOCATE));
                for _ in 0..num_points {
                    self.source.ensure(21, self.mode).await?;
                    let point_order = self.read_member_header(WKBType::Point, byte_order)?;
                    points.push(self.read_coord(point_order));
                }
                F::make_multi_point(points)
            }
            WKBType::MultiLineString => {
                let num_lines = self.read_count(byte_order).await?;
                let mut lines = Vec::with_capacity(num_lines.min(MAX_PREALLOCATE));
                for _ in 0..num_lines {
                    self.source.ensure(9, self.mode).await?;
                    let line_order = self.read_member_header(WKBType::LineString, byte_order)?;
                    lines.push(self.read_coords(line_order).await?);
                }
                F::make_multi_line_string(lines)
            }
            WKBType::MultiPolygon => {
                let num_polygons = self.read_count(byte_order).await?;
                let mut polygons = Vec::with_capacity(num_polygons.min(MAX_PREALLOCATE));
                for _ in 0..num_polygons {
                    self.source.ensure(9, self.mode).await?;
                    let polygon_order = self.read_member_header(WKBType::Polygon, byte_order)?;
                    polygons.push(self.read_rings(polygon_order).await?);
                }
                F::make_multi_polygon(polygons)
            }
            WKBType::GeometryCollection => {
                let num_geometries = self.read_count(byte_order).await?;
                let mut members = Vec::with_capacity(num_geometries.min(MAX_PREALLOCATE));
                for _ in 0..num_geometries {
                    members.push(self.read_nested(depth + 1).await?);
                }
                F::make_collection(members)
            }
        };
        Ok(geom)
    }

    /// Consume the 5-byte header in front of each member of a Multi* geometry, returning the
    /// byte order its body is read with.
    ///
    /// The caller must have ensured the 5 header bytes.
    fn read_member_header(
        &mut self,
        expected: WKBType,
        container_order: Endianness,
    ) -> Result<Endianness> {
        let marker = self.source.read_u8();
        if self.strict_member_headers {
            let member_order = Endianness::from_marker(marker)?;
            let word = self.source.read_u32(member_order);
            if word != u32::from(expected) {
                return Err(EwkbError::UnexpectedMemberType {
                    expected,
                    found: word,
                });
            }
            Ok(member_order)
        } else {
            let member_order = Endianness::from_marker(marker).unwrap_or(container_order);
            let word = self.source.read_u32(member_order);
            if marker > 1 || word != u32::from(expected) {
                warn!("skipping member header {marker}/{word:#x} where {expected:?} was expected");
            }
            Ok(container_order)
        }
    }

    async fn read_count(&mut self, byte_order: Endianness) -> Result<usize> {
        self.source.ensure(4, self.mode).await?;
        Ok(self.source.read_u32(byte_order) as usize)
    }

    /// The caller must have ensured the 16 coordinate bytes.
    fn read_coord(&mut self, byte_order: Endianness) -> F::Coord {
        let x = self.source.read_f64(byte_order);
        let y = self.source.read_f64(byte_order);
        F::make_coord(x, y)
    }

    async fn read_coords(&mut self, byte_order: Endianness) -> Result<Vec<F::Coord>> {
        let num_points = self.read_count(byte_order).await?;
        let mut coords = Vec::with_capacity(num_points.min(MAX_PREALLOCATE));
        for _ in 0..num_points {
            self.source.ensure(16, self.mode).await?;
            coords.push(self.read_coord(byte_order));
        }
        Ok(coords)
    }

    async fn read_rings(&mut self, byte_order: Endianness) -> Result<Vec<Vec<F::Coord>>> {
        let num_rings = self.read_count(byte_order).await?;
        let mut rings = Vec::with_capacity(num_rings.min(MAX_PREALLOCATE));
        for _ in 0..num_rings {
            rings.push(self.read_coords(byte_order).await?);
        }
        Ok(rings)
    }
}

/// Decode one geometry of family `F` from `source`.
pub async fn read_geometry<F: GeometryFamily, C: Channel>(
    source: &mut ReadBuffer<C>,
    mode: IoMode,
    options: &CodecOptions,
) -> Result<F::Geometry> {
    WKBReader::<F, C>::new(source, mode, options)
        .read_geometry()
        .await
}
