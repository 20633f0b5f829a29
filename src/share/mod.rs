//! Share module containing the local LAN file server.
//!
//! A share session exposes one directory over plain HTTP to the local
//! network: directory listings, file bodies, and an optional highlighted
//! file whose direct link is printed with percent-encoding applied.
//!
//! This is a trust boundary by design: any host that can reach the bound
//! port gets read access to the shared directory tree. There is no TLS and
//! no authentication; the server exists for quick LAN handoffs, not for
//! exposure beyond it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use snag::share::ShareServer;
//!
//! # async fn example() -> Result<(), snag::Error> {
//! let mut server = ShareServer::new("/srv/drop", Some("my file.pdf".to_string()))?;
//! server.serve().await?; // runs until ctrl-c
//! # Ok(())
//! # }
//! ```

pub mod net;
pub mod server;

pub use net::{find_free_port, local_ip, BASE_PORT};
pub use server::{direct_file_link, SharePhase, ShareServer};
