//! Mapping of the quality dial and channel mode onto engine arguments.

use super::types::{ChannelMapping, ChannelMode, EncoderParameters, Quality, TargetFormat};

/// Highest AAC bitrate, used at quality 0.
const M4A_MAX_BITRATE_KBPS: u32 = 320;
/// Bitrate dropped per quality step.
const M4A_STEP_KBPS: u32 = 24;
/// AAC bitrate floor.
const M4A_MIN_BITRATE_KBPS: u32 = 64;
/// Highest FLAC compression level.
const FLAC_MAX_COMPRESSION: u8 = 12;

/// Maps a target format and quality onto the engine's encoder flag.
///
/// - ogg: `-q:a <quality>`, the engine's native 0-10 scale as-is
/// - m4a: `-b:a <max(64, 320 - 24q)>k`
/// - flac: `-compression_level <min(12, q)>`
pub fn map_parameters(format: TargetFormat, quality: Quality) -> EncoderParameters {
    let q = quality.value();

    let (flag, value) = match format {
        TargetFormat::Ogg => ("-q:a", q.to_string()),
        TargetFormat::M4a => ("-b:a", format!("{}k", m4a_bitrate_kbps(quality))),
        TargetFormat::Flac => ("-compression_level", q.min(FLAC_MAX_COMPRESSION).to_string()),
    };

    EncoderParameters {
        flag: flag.to_string(),
        value,
        extra_args: Vec::new(),
    }
}

/// AAC bitrate in kbps for the given quality.
pub fn m4a_bitrate_kbps(quality: Quality) -> u32 {
    M4A_MAX_BITRATE_KBPS
        .saturating_sub(u32::from(quality.value()) * M4A_STEP_KBPS)
        .max(M4A_MIN_BITRATE_KBPS)
}

/// Maps a channel mode onto `-ac` arguments and the output subdirectory.
pub fn map_channels(mode: ChannelMode) -> ChannelMapping {
    match mode {
        ChannelMode::Preserve => ChannelMapping {
            args: Vec::new(),
            subdirectory: ".",
        },
        ChannelMode::ForceMono => ChannelMapping {
            args: vec!["-ac".to_string(), "1".to_string()],
            subdirectory: "m",
        },
        ChannelMode::ForceStereo => ChannelMapping {
            args: vec!["-ac".to_string(), "2".to_string()],
            subdirectory: "s",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_qualities() -> impl Iterator<Item = Quality> {
        (0..=Quality::MAX).map(Quality::new)
    }

    #[test]
    fn test_ogg_passes_quality_through() {
        for q in all_qualities() {
            let params = map_parameters(TargetFormat::Ogg, q);
            assert_eq!(params.flag, "-q:a");
            assert_eq!(params.value, q.value().to_string());
            assert!(params.extra_args.is_empty());
        }
    }

    #[test]
    fn test_m4a_bitrate_formula() {
        let mut previous = u32::MAX;
        for q in all_qualities() {
            let expected = (320 - 24 * u32::from(q.value())).max(64);
            let bitrate = m4a_bitrate_kbps(q);
            assert_eq!(bitrate, expected);
            assert!((64..=320).contains(&bitrate));
            assert!(bitrate <= previous, "bitrate must not grow with q");
            previous = bitrate;

            let params = map_parameters(TargetFormat::M4a, q);
            assert_eq!(params.flag, "-b:a");
            assert_eq!(params.value, format!("{}k", expected));
        }
    }

    #[test]
    fn test_m4a_endpoints() {
        assert_eq!(map_parameters(TargetFormat::M4a, Quality::new(0)).value, "320k");
        assert_eq!(map_parameters(TargetFormat::M4a, Quality::new(10)).value, "80k");
    }

    #[test]
    fn test_flac_compression_level() {
        for q in all_qualities() {
            let params = map_parameters(TargetFormat::Flac, q);
            assert_eq!(params.flag, "-compression_level");
            assert_eq!(params.value, q.value().to_string());
        }
    }

    #[test]
    fn test_channel_mapping() {
        let preserve = map_channels(ChannelMode::Preserve);
        assert!(preserve.args.is_empty());
        assert_eq!(preserve.subdirectory, ".");

        let mono = map_channels(ChannelMode::ForceMono);
        assert_eq!(mono.args, vec!["-ac", "1"]);
        assert_eq!(mono.subdirectory, "m");

        let stereo = map_channels(ChannelMode::ForceStereo);
        assert_eq!(stereo.args, vec!["-ac", "2"]);
        assert_eq!(stereo.subdirectory, "s");
    }
}
