//! Audio decoding for speech recognition
//!
//! Converts any supported input container to the 16 kHz mono f32 PCM stream
//! whisper.cpp expects. WAV files are read directly with hound; compressed
//! formats go through symphonia. Sources at other sample rates are run
//! through a sinc resampler.

use crate::error::{AppError, Result};
use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Sample rate whisper.cpp expects.
pub const WHISPER_SAMPLE_RATE: u32 = 16_000;

/// Decode a media file to 16 kHz mono f32 samples.
pub fn decode_to_pcm(path: &Path) -> Result<Vec<f32>> {
    let is_wav = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false);

    let (samples, source_rate) = if is_wav {
        decode_wav(path)?
    } else {
        decode_compressed(path)?
    };

    if samples.is_empty() {
        return Err(AppError::AudioDecode(
            "no audio samples decoded".to_string(),
        ));
    }

    let samples = if source_rate != WHISPER_SAMPLE_RATE {
        resample(&samples, source_rate, WHISPER_SAMPLE_RATE)?
    } else {
        samples
    };

    log::debug!(
        "Decoded {} samples ({:.2}s) of 16kHz mono PCM",
        samples.len(),
        samples.len() as f32 / WHISPER_SAMPLE_RATE as f32
    );

    Ok(samples)
}

fn decode_wav(path: &Path) -> Result<(Vec<f32>, u32)> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| AppError::AudioDecode(format!("failed to open WAV file: {}", e)))?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| AppError::AudioDecode(format!("failed to read WAV samples: {}", e)))?,
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| AppError::AudioDecode(format!("failed to read WAV samples: {}", e)))?
        }
    };

    Ok((downmix(&interleaved, channels), spec.sample_rate))
}

fn decode_compressed(path: &Path) -> Result<(Vec<f32>, u32)> {
    let file = File::open(path)
        .map_err(|e| AppError::AudioDecode(format!("failed to open {}: {}", path.display(), e)))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AppError::AudioDecode(format!("unrecognized media format: {}", e)))?;

    let mut format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| AppError::AudioDecode("no audio track found".to_string()))?;
    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let source_rate = codec_params
        .sample_rate
        .ok_or_else(|| AppError::AudioDecode("unknown sample rate".to_string()))?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(1);

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .map_err(|e| AppError::AudioDecode(format!("unsupported codec: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => return Err(AppError::AudioDecode(format!("packet read failed: {}", e))),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(symphonia::core::errors::Error::DecodeError(e)) => {
                log::warn!("Skipping corrupt audio frame: {}", e);
                continue;
            }
            Err(e) => return Err(AppError::AudioDecode(format!("decode failed: {}", e))),
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        if num_frames == 0 {
            continue;
        }

        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        samples.extend(downmix(sample_buf.samples(), channels));
    }

    Ok((samples, source_rate))
}

fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Result<Vec<f32>> {
    use rubato::{
        Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
    };

    let params = SincInterpolationParameters {
        sinc_len: 256,
        f_cutoff: 0.95,
        interpolation: SincInterpolationType::Linear,
        oversampling_factor: 256,
        window: WindowFunction::BlackmanHarris2,
    };

    let ratio = to_rate as f64 / from_rate as f64;
    let chunk_size = 1024;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 2.0, params, chunk_size, 1)
        .map_err(|e| AppError::AudioDecode(format!("resampler init failed: {}", e)))?;

    let mut output = Vec::with_capacity((samples.len() as f64 * ratio) as usize + chunk_size);

    for chunk in samples.chunks(chunk_size) {
        // The resampler wants full chunks; pad the tail with silence.
        let input = if chunk.len() < chunk_size {
            let mut padded = chunk.to_vec();
            padded.resize(chunk_size, 0.0);
            padded
        } else {
            chunk.to_vec()
        };

        let processed = resampler
            .process(&[input], None)
            .map_err(|e| AppError::AudioDecode(format!("resample failed: {}", e)))?;

        if let Some(channel) = processed.first() {
            output.extend_from_slice(channel);
        }
    }

    output.truncate((samples.len() as f64 * ratio) as usize);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};
    use tempfile::tempdir;

    fn write_wav(path: &Path, sample_rate: u32, channels: u16, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &sample in samples {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_decode_wav_at_target_rate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tone.wav");
        let samples: Vec<i16> = (0..16_000)
            .map(|i| {
                let t = i as f64 / 16_000.0;
                ((2.0 * std::f64::consts::PI * 440.0 * t).sin() * 10_000.0) as i16
            })
            .collect();
        write_wav(&path, 16_000, 1, &samples);

        let pcm = decode_to_pcm(&path).unwrap();
        assert_eq!(pcm.len(), 16_000);
        assert!(pcm.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_decode_wav_downmixes_stereo() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        // 1000 frames, left channel +8000, right channel -8000: mono mix is 0.
        let samples: Vec<i16> = (0..2000)
            .map(|i| if i % 2 == 0 { 8000 } else { -8000 })
            .collect();
        write_wav(&path, 16_000, 2, &samples);

        let pcm = decode_to_pcm(&path).unwrap();
        assert_eq!(pcm.len(), 1000);
        assert!(pcm.iter().all(|s| s.abs() < 1e-4));
    }

    #[test]
    fn test_decode_wav_resamples_to_16k() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("slow.wav");
        let samples = vec![5000i16; 8000]; // one second at 8 kHz
        write_wav(&path, 8000, 1, &samples);

        let pcm = decode_to_pcm(&path).unwrap();
        // One second of audio should come out near 16000 samples.
        assert!(
            (pcm.len() as i64 - 16_000).unsigned_abs() < 1600,
            "unexpected resampled length {}",
            pcm.len()
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.mp3");
        std::fs::write(&path, b"this is not an mp3 file at all").unwrap();

        let err = decode_to_pcm(&path).unwrap_err();
        assert!(matches!(err, AppError::AudioDecode(_)));
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode_to_pcm(Path::new("/nonexistent/audio.mp3")).unwrap_err();
        assert!(matches!(err, AppError::AudioDecode(_)));
    }
}
