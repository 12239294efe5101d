use std::fs::File;
use std::io::{ErrorKind, Read};

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::*;

/// Number of leading bytes read from a source before matching signatures.
pub const SIGNATURE_LEN: usize = 4;

/// Magic numbers, matched as prefixes of the first [`SIGNATURE_LEN`] bytes
/// in table order. The first match wins.
pub static CONTENT_SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF", "application/pdf"),
    (b"\x89PNG", "image/png"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"GIF8", "image/gif"),
    (b"II*\x00", "image/tiff"),
    (b"MM\x00*", "image/tiff"),
    (b"\x00\x00\x01\x00", "image/x-icon"),
    (b"BM", "image/bmp"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1F\x8B", "application/gzip"),
    (b"Rar!", "application/vnd.rar"),
    (b"7z\xBC\xAF", "application/x-7z-compressed"),
    (b"BZh", "application/x-bzip2"),
    (b"\x7FELF", "application/x-executable"),
    (b"MZ", "application/x-msdownload"),
    (b"OggS", "audio/ogg"),
    (b"fLaC", "audio/flac"),
    (b"ID3", "audio/mpeg"),
    (b"\x1A\x45\xDF\xA3", "video/webm"),
    (b"wOFF", "font/woff"),
    (b"wOF2", "font/woff2"),
    (b"OTTO", "font/otf"),
    (b"\x00\x01\x00\x00", "font/ttf"),
    (b"{\\rt", "application/rtf"),
    (b"%!PS", "application/postscript"),
    (b"\x00asm", "application/wasm"),
];

/// Sniffs the MIME type of a file from its first bytes.
///
/// The file is opened and closed within the call. Fails with
/// [`MimeError::TooShort`] when the file holds fewer than
/// [`SIGNATURE_LEN`] bytes.
pub fn get_mime_type_by_content(path: impl AsRef<Path>) -> Result<&'static str> {
    let mut file = File::open(path.as_ref())?;
    get_mime_type_by_content_from_reader(&mut file)
}

/// Sniffs the MIME type from the next [`SIGNATURE_LEN`] bytes of `reader`.
///
/// The reader stays with the caller and is left positioned after the bytes
/// consumed here.
pub fn get_mime_type_by_content_from_reader<R: Read + ?Sized>(reader: &mut R) -> Result<&'static str> {
    let mut header = [0u8; SIGNATURE_LEN];
    reader.read_exact(&mut header).map_err(short_read)?;
    Ok(match_signature(&header))
}

/// Async counterpart of [`get_mime_type_by_content`].
pub async fn get_mime_type_by_content_async(path: impl AsRef<Path>) -> Result<&'static str> {
    let mut file = tokio::fs::File::open(path.as_ref()).await?;
    get_mime_type_by_content_from_async_reader(&mut file).await
}

/// Async counterpart of [`get_mime_type_by_content_from_reader`].
pub async fn get_mime_type_by_content_from_async_reader<R>(reader: &mut R) -> Result<&'static str>
where
    R: AsyncRead + Unpin + ?Sized,
{
    let mut header = [0u8; SIGNATURE_LEN];
    reader.read_exact(&mut header).await.map_err(short_read)?;
    Ok(match_signature(&header))
}

pub fn match_signature(header: &[u8]) -> &'static str {
    CONTENT_SIGNATURES
        .iter()
        .find(|(magic, _)| header.starts_with(magic))
        .map(|(magic, mime)| {
            tracing::trace!(?magic, mime, "content signature matched");
            *mime
        })
        .unwrap_or(DEFAULT_MIME_TYPE)
}

fn short_read(e: std::io::Error) -> MimeError {
    match e.kind() {
        ErrorKind::UnexpectedEof => MimeError::TooShort {
            needed: SIGNATURE_LEN,
        },
        _ => MimeError::Io(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn matches_known_signatures() {
        assert_eq!(match_signature(b"%PDF-1.7"), "application/pdf");
        assert_eq!(match_signature(b"\x89PNG"), "image/png");
        assert_eq!(match_signature(b"\xFF\xD8\xFF\xE0"), "image/jpeg");
        assert_eq!(match_signature(b"PK\x03\x04"), "application/zip");
        assert_eq!(match_signature(b"\x1F\x8B\x08\x00"), "application/gzip");
        assert_eq!(match_signature(b"MZ\x90\x00"), "application/x-msdownload");
        assert_eq!(match_signature(b"abcd"), DEFAULT_MIME_TYPE);
    }

    #[test]
    fn signatures_fit_in_header() {
        for (magic, mime) in CONTENT_SIGNATURES {
            assert!(!magic.is_empty() && magic.len() <= SIGNATURE_LEN, "{mime}");
            assert!(!mime.is_empty());
        }
    }

    #[test]
    fn reader_keeps_position_after_header() {
        let mut cursor = Cursor::new(b"GIF89a rest".to_vec());
        assert_eq!(get_mime_type_by_content_from_reader(&mut cursor).unwrap(), "image/gif");
        assert_eq!(cursor.position(), SIGNATURE_LEN as u64);
    }

    #[test]
    fn short_reader_is_an_error() {
        let mut cursor = Cursor::new(b"%PD".to_vec());
        let err = get_mime_type_by_content_from_reader(&mut cursor).unwrap_err();
        assert!(matches!(err, MimeError::TooShort { needed: 4 }));
    }

    #[tokio::test]
    async fn async_reader_matches_sync() {
        let mut bytes: &[u8] = b"OggS\x00\x02";
        assert_eq!(
            get_mime_type_by_content_from_async_reader(&mut bytes).await.unwrap(),
            "audio/ogg"
        );

        let mut empty: &[u8] = b"";
        assert!(matches!(
            get_mime_type_by_content_from_async_reader(&mut empty).await,
            Err(MimeError::TooShort { .. })
        ));
    }
}
