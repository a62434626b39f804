//! Filename-extension to MIME type guessing.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::path::split_ext;

/// Compound suffixes rewritten before lookup.
const SUFFIX_MAP: &[(&str, &str)] = &[
    (".tgz", ".tar.gz"),
    (".taz", ".tar.gz"),
    (".tz", ".tar.gz"),
    (".tbz2", ".tar.bz2"),
    (".txz", ".tar.xz"),
];

/// Content-encoding suffixes; the type comes from the extension before them.
const ENCODING_SUFFIXES: &[&str] = &[".gz", ".Z", ".bz2", ".xz"];

static TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        (".a", "application/octet-stream"),
        (".ai", "application/postscript"),
        (".aif", "audio/x-aiff"),
        (".aifc", "audio/x-aiff"),
        (".aiff", "audio/x-aiff"),
        (".au", "audio/basic"),
        (".avi", "video/x-msvideo"),
        (".bat", "text/plain"),
        (".bcpio", "application/x-bcpio"),
        (".bin", "application/octet-stream"),
        (".bmp", "image/x-ms-bmp"),
        (".c", "text/plain"),
        (".cdf", "application/x-netcdf"),
        (".cpio", "application/x-cpio"),
        (".csh", "application/x-csh"),
        (".css", "text/css"),
        (".dll", "application/octet-stream"),
        (".doc", "application/msword"),
        (".dot", "application/msword"),
        (".dvi", "application/x-dvi"),
        (".eml", "message/rfc822"),
        (".eps", "application/postscript"),
        (".etx", "text/x-setext"),
        (".exe", "application/octet-stream"),
        (".gif", "image/gif"),
        (".gtar", "application/x-gtar"),
        (".h", "text/plain"),
        (".hdf", "application/x-hdf"),
        (".htm", "text/html"),
        (".html", "text/html"),
        (".ico", "image/vnd.microsoft.icon"),
        (".ief", "image/ief"),
        (".jpe", "image/jpeg"),
        (".jpeg", "image/jpeg"),
        (".jpg", "image/jpeg"),
        (".js", "application/javascript"),
        (".json", "application/json"),
        (".ksh", "text/plain"),
        (".latex", "application/x-latex"),
        (".m1v", "video/mpeg"),
        (".man", "application/x-troff-man"),
        (".me", "application/x-troff-me"),
        (".mht", "message/rfc822"),
        (".mhtml", "message/rfc822"),
        (".mif", "application/x-mif"),
        (".mov", "video/quicktime"),
        (".movie", "video/x-sgi-movie"),
        (".mp2", "audio/mpeg"),
        (".mp3", "audio/mpeg"),
        (".mp4", "video/mp4"),
        (".mpa", "video/mpeg"),
        (".mpe", "video/mpeg"),
        (".mpeg", "video/mpeg"),
        (".mpg", "video/mpeg"),
        (".ms", "application/x-troff-ms"),
        (".nc", "application/x-netcdf"),
        (".nws", "message/rfc822"),
        (".o", "application/octet-stream"),
        (".obj", "application/octet-stream"),
        (".oda", "application/oda"),
        (".p12", "application/x-pkcs12"),
        (".p7c", "application/pkcs7-mime"),
        (".pbm", "image/x-portable-bitmap"),
        (".pdf", "application/pdf"),
        (".pfx", "application/x-pkcs12"),
        (".pgm", "image/x-portable-graymap"),
        (".pl", "text/plain"),
        (".png", "image/png"),
        (".pnm", "image/x-portable-anymap"),
        (".pot", "application/vnd.ms-powerpoint"),
        (".ppa", "application/vnd.ms-powerpoint"),
        (".ppm", "image/x-portable-pixmap"),
        (".pps", "application/vnd.ms-powerpoint"),
        (".ppt", "application/vnd.ms-powerpoint"),
        (".ps", "application/postscript"),
        (".pwz", "application/vnd.ms-powerpoint"),
        (".py", "text/x-python"),
        (".pyc", "application/x-python-code"),
        (".pyo", "application/x-python-code"),
        (".qt", "video/quicktime"),
        (".ra", "audio/x-pn-realaudio"),
        (".ram", "application/x-pn-realaudio"),
        (".ras", "image/x-cmu-raster"),
        (".rdf", "application/xml"),
        (".rgb", "image/x-rgb"),
        (".roff", "application/x-troff"),
        (".rtx", "text/richtext"),
        (".sgm", "text/x-sgml"),
        (".sgml", "text/x-sgml"),
        (".sh", "application/x-sh"),
        (".shar", "application/x-shar"),
        (".snd", "audio/basic"),
        (".so", "application/octet-stream"),
        (".src", "application/x-wais-source"),
        (".sv4cpio", "application/x-sv4cpio"),
        (".sv4crc", "application/x-sv4crc"),
        (".svg", "image/svg+xml"),
        (".swf", "application/x-shockwave-flash"),
        (".t", "application/x-troff"),
        (".tar", "application/x-tar"),
        (".tcl", "application/x-tcl"),
        (".tex", "application/x-tex"),
        (".texi", "application/x-texinfo"),
        (".texinfo", "application/x-texinfo"),
        (".tif", "image/tiff"),
        (".tiff", "image/tiff"),
        (".tr", "application/x-troff"),
        (".tsv", "text/tab-separated-values"),
        (".txt", "text/plain"),
        (".ustar", "application/x-ustar"),
        (".vcf", "text/x-vcard"),
        (".wav", "audio/x-wav"),
        (".wiz", "application/msword"),
        (".wsdl", "application/xml"),
        (".xbm", "image/x-xbitmap"),
        (".xlb", "application/vnd.ms-excel"),
        (".xls", "application/vnd.ms-excel"),
        (".xml", "text/xml"),
        (".xpdl", "application/xml"),
        (".xpm", "image/x-xpixmap"),
        (".xsl", "application/xml"),
        (".xwd", "image/x-xwindowdump"),
        (".zip", "application/zip"),
    ]
    .into_iter()
    .collect()
});

/// Guesses the MIME type of `url` (a URL or plain filename) from its extension.
///
/// `data:` URLs report their declared media type.
pub fn guess_mime_type(url: &str) -> Option<String> {
    let rest = match url.split_once(':') {
        Some((scheme, rest)) if !scheme.is_empty() && !scheme.contains('/') => {
            if scheme.eq_ignore_ascii_case("data") {
                return Some(data_url_type(rest));
            }
            rest
        }
        _ => url,
    };

    let (root, ext) = split_ext(rest);
    let mut root = root.to_string();
    let mut ext = ext.to_string();
    while let Some((_, expanded)) = SUFFIX_MAP.iter().find(|(suffix, _)| *suffix == ext) {
        let joined = format!("{root}{expanded}");
        let (r, e) = split_ext(&joined);
        (root, ext) = (r.to_string(), e.to_string());
    }
    if ENCODING_SUFFIXES.contains(&ext.as_str()) {
        let (_, e) = split_ext(&root);
        ext = e.to_string();
    }

    TYPES
        .get(ext.as_str())
        .or_else(|| TYPES.get(ext.to_ascii_lowercase().as_str()))
        .map(|t| t.to_string())
}

/// Media type of a `data:` URL body (`type/subtype[;params],payload`).
fn data_url_type(body: &str) -> String {
    let header = body.split_once(',').map_or(body, |(h, _)| h);
    let media = header.split_once(';').map_or(header, |(m, _)| m);
    if media.contains('=') || !media.contains('/') {
        "text/plain".to_string()
    } else {
        media.to_string()
    }
}
