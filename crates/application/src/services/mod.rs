mod zone_mapper;

pub use zone_mapper::ZoneMapper;
