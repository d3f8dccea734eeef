//! Tests for the HTTP request-line parser.

#[cfg(test)]
mod tests {
    use crate::parser::{parse_request, request_line, Error, HttpRequest, Method};

    #[test]
    fn test_parse_simple_get_request() {
        let request = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.method, Method::GET);
        assert_eq!(result.path, "/index.html");
        assert_eq!(result.version, "HTTP/1.1");
    }

    #[test]
    fn test_headers_are_not_interpreted() {
        // A header line that would be invalid is never looked at
        let request = b"GET / HTTP/1.1\r\nthis is not a header\r\n\r\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result, HttpRequest::new(Method::GET, "/", "HTTP/1.1"));
    }

    #[test]
    fn test_bare_newline_terminator() {
        let request = b"GET /a.txt HTTP/1.0\nHost: localhost\n\n";
        let result = parse_request(request).unwrap();
        assert_eq!(result.path, "/a.txt");
        assert_eq!(result.version, "HTTP/1.0");
    }

    #[test]
    fn test_request_line_without_terminator() {
        let result = parse_request(b"GET /only-line HTTP/1.1").unwrap();
        assert_eq!(result.path, "/only-line");
    }

    #[test]
    fn test_request_line_with_extra_whitespace() {
        let input = b"GET  /path \t  HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/path");
        assert_eq!(req.version, "HTTP/1.1");
    }

    #[test]
    fn test_version_token_is_kept_verbatim() {
        let req = parse_request(b"GET / HTTP/9.9\r\n\r\n").unwrap();
        assert_eq!(req.version, "HTTP/9.9");
    }

    #[test]
    fn test_unknown_method_still_parses() {
        let req = parse_request(b"BREW /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(req.method, Method::Other("BREW".to_string()));
        assert!(!req.method.is_get());
    }

    #[test]
    fn test_method_is_case_sensitive() {
        let req = parse_request(b"get / HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(req.method, Method::Other("get".to_string()));
    }

    #[test]
    fn test_incomplete_request_line() {
        let result = parse_request(b"GET\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref l)) if l == "GET"));

        let result = parse_request(b"GET /index.html\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_too_many_tokens() {
        let result = parse_request(b"GET /a b HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_blank_first_line() {
        let result = parse_request(b"\r\nGET / HTTP/1.1\r\n\r\n");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref l)) if l.is_empty()));
    }

    #[test]
    fn test_empty_request() {
        let result = parse_request(b"");
        assert!(matches!(result, Err(Error::EmptyRequest)));
    }

    #[test]
    fn test_invalid_utf8_in_request_line() {
        let mut input = Vec::from(*b"GET / HTTP/1.1\r\n\r\n");
        input.splice(5..5, vec![0xFF, 0xFE]);

        let result = parse_request(&input);
        assert!(matches!(result, Err(Error::InvalidEncoding)));
    }

    #[test]
    fn test_invalid_utf8_after_request_line_is_ignored() {
        let mut input = Vec::from(*b"GET / HTTP/1.1\r\nX-Junk: ");
        input.extend_from_slice(&[0xFF, 0xFF, b'\r', b'\n']);

        let req = parse_request(&input).unwrap();
        assert_eq!(req.path, "/");
    }

    #[test]
    fn test_request_line_is_trimmed() {
        assert_eq!(request_line(b"  GET / HTTP/1.1 \r\nHost: x\r\n").unwrap(), "GET / HTTP/1.1");
    }

    #[test]
    fn test_target_strips_query_and_fragment() {
        let req = HttpRequest::new(Method::GET, "/search?q=rust&page=1", "HTTP/1.1");
        assert_eq!(req.target(), "/search");

        let req = HttpRequest::new(Method::GET, "/doc.html#intro", "HTTP/1.1");
        assert_eq!(req.target(), "/doc.html");

        let req = HttpRequest::new(Method::GET, "/plain.txt", "HTTP/1.1");
        assert_eq!(req.target(), "/plain.txt");
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
        assert_eq!(Method::HEAD.to_string(), "HEAD");
        assert_eq!(Method::PATCH.to_string(), "PATCH");
        assert_eq!(Method::Other("BREW".to_string()).to_string(), "BREW");
    }
}
