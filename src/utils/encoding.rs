use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

/// Open a log source and return a buffered reader over its bytes.
///
/// `-` selects standard input. Either way a UTF-8/UTF-16 BOM is honored and
/// the text transcoded to UTF-8; input without a BOM passes through untouched
/// and is decoded per line by [`decode_line`].
pub fn open_log_reader(filepath: &str, buffer_size: usize) -> io::Result<Box<dyn BufRead>> {
    if filepath == "-" {
        return Ok(Box::new(bom_aware_reader(io::stdin(), buffer_size)));
    }

    let file = File::open(filepath)?;
    Ok(Box::new(bom_aware_reader(file, buffer_size)))
}

/// Wrap any byte source in BOM sniffing.
pub fn bom_aware_reader<R: Read>(
    source: R,
    buffer_size: usize,
) -> BufReader<DecodeReaderBytes<R, Vec<u8>>> {
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(None)
        .bom_sniffing(true)
        .build(source);
    BufReader::with_capacity(buffer_size, decoder)
}

/// Read the next raw line, including its terminator. Returns `Ok(false)` at
/// end of input.
pub fn read_raw_line<R: BufRead + ?Sized>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<bool> {
    buf.clear();
    let read = reader.read_until(b'\n', buf)?;
    Ok(read > 0)
}

/// Detect text encoding from a byte slice.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode one raw line to text. Valid UTF-8 is borrowed as is; anything else
/// goes through charset detection.
pub fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            let enc = detect_encoding(bytes);
            let (cow, _, _) = enc.decode(bytes);
            Cow::Owned(cow.into_owned())
        }
    }
}
