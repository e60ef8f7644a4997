#[cfg(test)]
mod metainfo_tests {
    mod metainfo_decoding_tests {
        use base64::Engine;
        use base64::engine::general_purpose::STANDARD;
        use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map};
        use sha1::{Digest, Sha1};
        use crate::metainfo::errors::MetainfoError;
        use crate::metainfo::structs::metainfo::Metainfo;

        fn single_file_info() -> Vec<u8> {
            ben_map! {
                "length" => ben_int!(1024),
                "name" => ben_bytes!("debian.iso"),
                "piece length" => ben_int!(16384),
                "pieces" => ben_bytes!(vec![7u8; 20])
            }.encode()
        }

        fn single_file_torrent() -> Vec<u8> {
            ben_map! {
                "announce" => ben_bytes!("http://tracker.example/announce"),
                "info" => ben_map! {
                    "length" => ben_int!(1024),
                    "name" => ben_bytes!("debian.iso"),
                    "piece length" => ben_int!(16384),
                    "pieces" => ben_bytes!(vec![7u8; 20])
                }
            }.encode()
        }

        #[test]
        fn test_info_hash_is_sha1_of_info_dictionary() {
            let metainfo = Metainfo::from_bytes(&single_file_torrent()).unwrap();
            let expected = hex::encode(Sha1::digest(single_file_info()));
            assert_eq!(metainfo.info_hash, expected);
            assert_eq!(metainfo.info_hash.len(), 40);
            assert_eq!(metainfo.name, "debian.iso");
            assert_eq!(metainfo.total_length, 1024);
        }

        #[test]
        fn test_multi_file_total_length() {
            let data = ben_map! {
                "info" => ben_map! {
                    "files" => ben_list!(
                        ben_map! { "length" => ben_int!(10), "path" => ben_list!(ben_bytes!("a")) },
                        ben_map! { "length" => ben_int!(32), "path" => ben_list!(ben_bytes!("b")) }
                    ),
                    "name" => ben_bytes!("album"),
                    "piece length" => ben_int!(16384),
                    "pieces" => ben_bytes!(vec![1u8; 20])
                }
            }.encode();
            let metainfo = Metainfo::from_bytes(&data).unwrap();
            assert_eq!(metainfo.name, "album");
            assert_eq!(metainfo.total_length, 42);
        }

        #[test]
        fn test_from_base64() {
            let encoded = STANDARD.encode(single_file_torrent());
            let (metainfo, raw) = Metainfo::from_base64(&encoded).unwrap();
            assert_eq!(raw, single_file_torrent());
            assert_eq!(metainfo.name, "debian.iso");
        }

        #[test]
        fn test_from_base64_ignores_line_breaks() {
            let encoded = STANDARD.encode(single_file_torrent());
            let (head, tail) = encoded.split_at(10);
            let wrapped = format!("{head}\n{tail}");
            assert!(Metainfo::from_base64(&wrapped).is_ok());
        }

        #[test]
        fn test_invalid_base64() {
            assert!(matches!(Metainfo::from_base64("***"), Err(MetainfoError::Base64Error(_))));
        }

        #[test]
        fn test_not_bencode() {
            assert!(matches!(Metainfo::from_bytes(b"not a torrent"), Err(MetainfoError::BencodeError(_))));
        }

        #[test]
        fn test_missing_info() {
            let data = ben_map! { "announce" => ben_bytes!("http://tracker") }.encode();
            assert_eq!(Metainfo::from_bytes(&data), Err(MetainfoError::MissingInfo));
        }

        #[test]
        fn test_missing_name() {
            let data = ben_map! { "info" => ben_map! { "length" => ben_int!(1) } }.encode();
            assert_eq!(Metainfo::from_bytes(&data), Err(MetainfoError::MissingName));
        }
    }

    mod magnet_link_tests {
        use crate::metainfo::impls::magnet_link::DEFAULT_MAGNET_NAME;
        use crate::metainfo::structs::magnet_link::MagnetLink;

        #[test]
        fn test_parse_hash_and_name() {
            let magnet = MagnetLink::parse(
                "magnet:?xt=urn:btih:C12FE1C06BBA254A9DC9F519B335AA7C1367A88A&dn=Example+File&tr=http%3A%2F%2Ftracker.example.com%2Fannounce"
            ).unwrap();
            assert_eq!(magnet.info_hash, "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
            assert_eq!(magnet.display_name, "Example File");
            assert_eq!(magnet.trackers, vec!["http://tracker.example.com/announce".to_string()]);
        }

        #[test]
        fn test_parse_default_name() {
            let magnet = MagnetLink::parse("magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a").unwrap();
            assert_eq!(magnet.display_name, DEFAULT_MAGNET_NAME);
            assert!(magnet.trackers.is_empty());
        }

        #[test]
        fn test_parse_rejects_malformed_hash() {
            assert!(MagnetLink::parse("magnet:?xt=urn:btih:zz").is_err());
            assert!(MagnetLink::parse("magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88").is_err());
            assert!(MagnetLink::parse("magnet:?xt=urn:btih:z12fe1c06bba254a9dc9f519b335aa7c1367a88a").is_err());
            assert!(MagnetLink::parse("magnet:?xt=urn:btih:YEX6DQDLXISUVHOJ6UM3GNNKPQJWPKE1").is_err());
        }

        #[test]
        fn test_parse_base32_hash() {
            let magnet = MagnetLink::parse("magnet:?xt=urn:btih:YEX6DQDLXISUVHOJ6UM3GNNKPQJWPKEK").unwrap();
            assert_eq!(magnet.info_hash, "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
        }

        #[test]
        fn test_parse_picks_btih_topic() {
            let magnet = MagnetLink::parse(
                "magnet:?xt=urn:sha1:abc&xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a"
            ).unwrap();
            assert_eq!(magnet.info_hash, "c12fe1c06bba254a9dc9f519b335aa7c1367a88a");
        }

        #[test]
        fn test_parse_rejects_missing_topic() {
            assert!(MagnetLink::parse("magnet:?dn=nothing").is_err());
            assert!(MagnetLink::parse("http://example.com/a.torrent").is_err());
        }

        #[test]
        fn test_is_magnet() {
            assert!(MagnetLink::is_magnet("magnet:?xt=urn:btih:abc"));
            assert!(!MagnetLink::is_magnet("https://example.com/a.torrent"));
        }
    }
}
