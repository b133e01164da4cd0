// src/binary_extensions.rs
// =============================================================================
// Static table of file extensions that are treated as binary.
//
// Lookups use the lower-cased extension without the leading dot ("png", not
// ".png"). The table is built once on first use.
// =============================================================================

use once_cell::sync::Lazy;
use std::collections::HashSet;

const BINARY_EXTENSIONS: &[&str] = &[
    // images
    "3dm", "3ds", "3g2", "3gp", "apng", "avif", "bmp", "cgm", "cr2", "dds", "djvu", "dng",
    "eps", "exr", "fh", "fpx", "gif", "heic", "heif", "ico", "icns", "jpeg", "jpg", "jxl",
    "ktx", "mdi", "nef", "npx", "orf", "pbm", "pcx", "pgm", "pic", "png", "ppm", "psd",
    "ras", "raw", "rgb", "tga", "tif", "tiff", "wbmp", "webp", "xbm", "xpm", "xwd",
    // audio
    "aac", "adp", "aif", "aifc", "aiff", "amr", "ape", "au", "caf", "dts", "flac", "m4a",
    "mid", "midi", "mka", "mp2", "mp3", "mpga", "oga", "ogg", "opus", "ra", "wav", "weba",
    "wma",
    // video
    "avi", "f4v", "fli", "flv", "h261", "h263", "h264", "m4v", "mj2", "mkv", "mng", "mov",
    "mp4", "mp4v", "mpeg", "mpg", "mxu", "ogv", "qt", "viv", "webm", "wmv",
    // archives and compressed data
    "7z", "apk", "ar", "arj", "bz2", "cab", "cpio", "deb", "dmg", "ear", "gz", "img", "iso",
    "jar", "lz", "lz4", "lzh", "lzma", "pkg", "rar", "rpm", "s7z", "tar", "tbz", "tbz2",
    "tgz", "txz", "war", "whl", "xar", "xz", "z", "zip", "zipx", "zst",
    // executables and object code
    "a", "bin", "class", "com", "dex", "dll", "dylib", "elf", "exe", "ko", "lib", "msi",
    "o", "obj", "pdb", "pyc", "pyo", "rlib", "so", "wasm",
    // documents
    "doc", "docm", "docx", "dot", "dotx", "key", "numbers", "odp", "ods", "odt", "pages",
    "pdf", "pot", "potx", "pps", "ppsx", "ppt", "pptm", "pptx", "rtf", "xla", "xlam",
    "xls", "xlsb", "xlsm", "xlsx", "xlt", "xltx", "xps",
    // fonts
    "eot", "otf", "ttc", "ttf", "woff", "woff2",
    // data stores
    "db", "dbf", "mdb", "sqlite", "sqlite3", "parquet", "pickle", "pkl", "npy", "npz",
    "onnx", "pt", "h5",
    // misc
    "dat", "dsk", "fla", "flatpak", "jxr", "mobi", "epub", "swf", "snap", "vsd", "vsdx",
];

static TABLE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| BINARY_EXTENSIONS.iter().copied().collect());

/// True when `extension` (lower-cased, no leading dot) is a known binary type
pub fn is_binary_extension(extension: &str) -> bool {
    TABLE.contains(extension)
}
