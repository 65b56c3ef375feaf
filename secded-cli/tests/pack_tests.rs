use std::fs;
use tempfile::tempdir;

use secded_cli::commands::{pack, unpack};
use secded_core::{DataWidth, DecoderConfig, ErrorClass};

fn write_file<P: AsRef<std::path::Path>>(p: P, s: &[u8]) {
    fs::write(p, s).unwrap();
}

/// Flip one bit of the packed body, addressed as (block, 1-indexed position)
fn flip_packed_bit(path: &std::path::Path, block: usize, position: usize) {
    let mut packed: pack::PackedFile =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let mut body = hex::decode(&packed.body).unwrap();

    let bit = block * packed.width.codeword_len() + position - 1;
    body[bit / 8] ^= 0x80 >> (bit % 8);

    packed.body = hex::encode(body);
    fs::write(path, serde_json::to_string(&packed).unwrap()).unwrap();
}

#[test]
fn pack_then_unpack_round_trip() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.bin");
    let packed_path = td.path().join("packed.json");
    let out_path = td.path().join("out.bin");

    let input = b"The quick brown fox jumps over the lazy dog";
    write_file(&in_path, input);

    for width in [8, 16, 32] {
        pack::execute(
            in_path.to_str().unwrap(),
            packed_path.to_str().unwrap(),
            width,
        )
        .unwrap();

        let packed: pack::PackedFile =
            serde_json::from_str(&fs::read_to_string(&packed_path).unwrap()).unwrap();
        assert_eq!(packed.width, DataWidth::from_bits(width).unwrap());
        assert_eq!(packed.byte_len, input.len());

        let report = unpack::run(
            packed_path.to_str().unwrap(),
            out_path.to_str().unwrap(),
            DecoderConfig::default(),
        )
        .unwrap();

        assert_eq!(report.clean, report.blocks.len());
        assert_eq!(fs::read(&out_path).unwrap(), input);
    }
}

#[test]
fn unpack_corrects_single_bit_damage() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.bin");
    let packed_path = td.path().join("packed.json");
    let out_path = td.path().join("out.bin");

    let input = b"sec-ded";
    write_file(&in_path, input);

    pack::execute(
        in_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        16,
    )
    .unwrap();

    flip_packed_bit(&packed_path, 0, 3);
    flip_packed_bit(&packed_path, 2, 21);

    let report = unpack::run(
        packed_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        DecoderConfig::default(),
    )
    .unwrap();

    assert_eq!(report.corrected, 2);
    assert_eq!(
        report.blocks[2].classification,
        ErrorClass::SingleCorrectable(21)
    );
    assert_eq!(fs::read(&out_path).unwrap(), input);
}

#[test]
fn unpack_refuses_uncorrectable_block() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.bin");
    let packed_path = td.path().join("packed.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, b"abc");
    pack::execute(
        in_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        8,
    )
    .unwrap();

    flip_packed_bit(&packed_path, 1, 4);
    flip_packed_bit(&packed_path, 1, 7);

    let report = unpack::run(
        packed_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        DecoderConfig::default(),
    )
    .unwrap();
    assert_eq!(report.uncorrectable, 1);
    assert!(report.data.is_none());
    assert!(!out_path.exists());

    let err = unpack::execute(
        packed_path.to_str().unwrap(),
        out_path.to_str().unwrap(),
        DecoderConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("could not be recovered"));
}

#[test]
fn pack_rejects_unsupported_width() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.bin");
    write_file(&in_path, b"x");

    let err = pack::execute(
        in_path.to_str().unwrap(),
        td.path().join("out.json").to_str().unwrap(),
        12,
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("Unsupported block width"));
}

#[test]
fn unpack_rejects_crafted_header() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.bin");
    let packed_path = td.path().join("packed.json");
    let out_path = td.path().join("out.bin");

    write_file(&in_path, b"abcd");
    pack::execute(
        in_path.to_str().unwrap(),
        packed_path.to_str().unwrap(),
        8,
    )
    .unwrap();
    let original: pack::PackedFile =
        serde_json::from_str(&fs::read_to_string(&packed_path).unwrap()).unwrap();

    for (blocks, expected) in [
        (usize::MAX / 4, "Truncated stream"),
        (1, "Inconsistent stream header"),
    ] {
        let crafted = pack::PackedFile {
            blocks,
            ..original.clone()
        };
        fs::write(&packed_path, serde_json::to_string(&crafted).unwrap()).unwrap();

        let err = unpack::run(
            packed_path.to_str().unwrap(),
            out_path.to_str().unwrap(),
            DecoderConfig::default(),
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains(expected));
        assert!(!out_path.exists());
    }
}
