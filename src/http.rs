//! Minimal HTTP kernel surface
//!
//! Just enough request/response plumbing for the toolbar to sit in a host
//! pipeline: a builder-constructed [`Request`], a [`Response`] with the
//! usual constructors, and the async [`Handler`]/[`Middleware`] seams the
//! host kernel drives.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http::uri::InvalidUri;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, StatusCode, Uri, Version};
use thiserror::Error;

/// Error carried through the request pipeline
///
/// Handlers fail with it and middleware propagates it. The toolbar
/// middleware lets collectors observe the failure before passing it on.
#[derive(Debug, Clone, Error)]
#[error("handler failed: {message}")]
pub struct HandlerError {
	message: String,
}

impl HandlerError {
	/// Creates an error from a message
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// The failure message
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// An HTTP request as seen by the pipeline
///
/// Bodies are reference-counted [`Bytes`], so cloning a request for
/// post-response inspection is cheap.
#[derive(Debug, Clone)]
pub struct Request {
	/// HTTP method
	pub method: Method,
	/// Request URI
	pub uri: Uri,
	/// HTTP protocol version
	pub version: Version,
	/// Request headers
	pub headers: HeaderMap,
	/// Request body
	pub body: Bytes,
	/// Peer address, when known
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	/// Starts building a request
	///
	/// # Examples
	///
	/// ```
	/// use hyper::Method;
	/// use storefront_debug_toolbar::Request;
	///
	/// let request = Request::builder()
	/// 	.method(Method::GET)
	/// 	.uri("/catalog?page=2")
	/// 	.build()
	/// 	.unwrap();
	/// assert_eq!(request.path(), "/catalog");
	/// assert_eq!(request.query(), Some("page=2"));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::new()
	}

	/// Request path component
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Raw query string, if present
	pub fn query(&self) -> Option<&str> {
		self.uri.query()
	}

	/// Client IP address, when the peer address is known
	pub fn client_ip(&self) -> Option<IpAddr> {
		self.remote_addr.map(|addr| addr.ip())
	}

	/// Returns a header value as a string, if present and valid UTF-8
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}
}

/// Builder for [`Request`]
///
/// Defaults to `GET /` over HTTP/1.1 with an empty body and no peer
/// address. The URI string is parsed when [`build`](Self::build) runs.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	remote_addr: Option<SocketAddr>,
}

impl RequestBuilder {
	fn new() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			remote_addr: None,
		}
	}

	/// Sets the HTTP method
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	/// Sets the request URI
	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	/// Sets the protocol version
	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	/// Replaces the full header map
	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	/// Adds a single header, ignoring invalid names or values
	pub fn header(mut self, name: &str, value: &str) -> Self {
		if let Ok(name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(value) = HeaderValue::from_str(value)
		{
			self.headers.insert(name, value);
		}
		self
	}

	/// Sets the request body
	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Sets the peer address
	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	/// Finishes the request, parsing the URI
	pub fn build(self) -> Result<Request, InvalidUri> {
		Ok(Request {
			method: self.method,
			uri: self.uri.parse()?,
			version: self.version,
			headers: self.headers,
			body: self.body,
			remote_addr: self.remote_addr,
		})
	}
}

/// An HTTP response as seen by the pipeline
#[derive(Debug, Clone)]
pub struct Response {
	/// Status code
	pub status: StatusCode,
	/// Response headers
	pub headers: HeaderMap,
	/// Response body
	pub body: Bytes,
}

impl Response {
	/// Creates an empty response with the given status
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Creates a 200 OK response
	///
	/// # Examples
	///
	/// ```
	/// use hyper::StatusCode;
	/// use storefront_debug_toolbar::Response;
	///
	/// let response = Response::ok().with_body("hello");
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert_eq!(response.body, "hello");
	/// ```
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Creates a 404 Not Found response
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Creates a 500 Internal Server Error response
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Sets the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Adds a header, ignoring invalid names or values
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(name) = HeaderName::from_bytes(name.as_bytes())
			&& let Ok(value) = HeaderValue::from_str(value)
		{
			self.headers.insert(name, value);
		}
		self
	}

	/// Returns a header value as a string, if present and valid UTF-8
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}
}

/// Terminal request handler
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use storefront_debug_toolbar::{Handler, HandlerError, Request, Response};
///
/// struct Hello;
///
/// #[async_trait]
/// impl Handler for Hello {
/// 	async fn handle(&self, _request: Request) -> Result<Response, HandlerError> {
/// 		Ok(Response::ok().with_body("hello"))
/// 	}
/// }
///
/// # tokio_test::block_on(async {
/// let request = Request::builder().uri("/").build().unwrap();
/// let response = Hello.handle(request).await.unwrap();
/// assert_eq!(response.body, "hello");
/// # })
/// ```
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles a request and produces a response
	async fn handle(&self, request: Request) -> Result<Response, HandlerError>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response, HandlerError> {
		(**self).handle(request).await
	}
}

/// Middleware wrapping a handler in the request pipeline
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request, delegating to `next` for the inner response
	async fn process(
		&self,
		request: Request,
		next: Arc<dyn Handler>,
	) -> Result<Response, HandlerError>;
}
