use log::{debug, info, warn};
use crate::backend::traits::torrent_backend::TorrentBackend;
use crate::config::structs::torrent_add_config::TorrentAddConfig;
use crate::metainfo::structs::magnet_link::MagnetLink;
use crate::metainfo::structs::metainfo::Metainfo;
use crate::registry::structs::identity_registry::IdentityRegistry;
use crate::rpc::enums::add_outcome::AddOutcome;
use crate::rpc::enums::add_source::AddSource;
use crate::rpc::errors::RpcError;
use crate::rpc::structs::add_reconciler::AddReconciler;
use crate::rpc::structs::added_torrent::AddedTorrent;
use crate::rpc::structs::pending_add::PendingAdd;

enum Submission {
    Upload(Vec<u8>),
    Download(String),
}

impl<'a> AddReconciler<'a> {
    pub fn new(backend: &'a dyn TorrentBackend, registry: &'a IdentityRegistry, config: TorrentAddConfig) -> AddReconciler<'a> {
        AddReconciler {
            backend,
            registry,
            config,
        }
    }

    /// Runs a `torrent-add` from submission to the final pause/resume command.
    ///
    /// The registry is reconciled before anything is submitted so a torrent the
    /// backend already carries is reported as a duplicate without touching it.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn add(&self, source: AddSource, download_dir: Option<&str>, cookies: Option<&str>, paused: bool) -> Result<AddOutcome, RpcError> {
        self.reconcile().await?;

        let (hash, name, submission) = self.prepare(source, cookies).await?;
        debug!("[ADD] Attempting to add {hash} \"{name}\"");

        if let Ok(id) = self.registry.id_of(&hash) {
            info!("[ADD] {hash} is already known as ID {id}");
            return Ok(AddOutcome::Duplicate(AddedTorrent {
                id,
                name,
                hash_string: hash,
            }));
        }

        match submission {
            Submission::Upload(data) => self.backend.upload(data, download_dir).await?,
            Submission::Download(link) => self.backend.download(&link, download_dir).await?,
        }

        let mut pending = PendingAdd::new(hash, name, self.config.poll_attempts);
        self.await_indexing(&mut pending).await?;
        let Some(id) = pending.resolved_id else {
            warn!("[ADD] {} was not indexed after {} attempts ({:?})", pending.hash, self.config.poll_attempts, self.config.budget());
            return Ok(AddOutcome::TimedOut);
        };

        if paused {
            self.backend.pause(&pending.hash).await?;
        } else {
            self.backend.resume(&pending.hash).await?;
        }

        info!("[ADD] New torrent {} \"{}\" has ID {id}", pending.hash, pending.name);
        Ok(AddOutcome::Added(AddedTorrent {
            id,
            name: pending.name,
            hash_string: pending.hash,
        }))
    }

    async fn reconcile(&self) -> Result<Vec<String>, RpcError> {
        let list = self.backend.torrent_list().await?;
        Ok(self.registry.reconcile(list.iter().map(|item| item.hash.as_str())))
    }

    async fn prepare(&self, source: AddSource, cookies: Option<&str>) -> Result<(String, String, Submission), RpcError> {
        match source {
            AddSource::Metainfo(encoded) => {
                let (metainfo, data) = Metainfo::from_base64(&encoded)?;
                Ok((metainfo.info_hash, metainfo.name, Submission::Upload(data)))
            }
            AddSource::Magnet(link) => {
                let magnet = MagnetLink::parse(&link)?;
                debug!("[ADD] Magnet {} lists {} trackers", magnet.info_hash, magnet.trackers.len());
                Ok((magnet.info_hash, magnet.display_name, Submission::Download(link)))
            }
            AddSource::Url(url) => {
                let data = self.backend.fetch(&url, cookies).await?;
                let metainfo = Metainfo::from_bytes(&data)?;
                Ok((metainfo.info_hash, metainfo.name, Submission::Upload(data)))
            }
        }
    }

    async fn await_indexing(&self, pending: &mut PendingAdd) -> Result<(), RpcError> {
        while pending.take_attempt() {
            tokio::time::sleep(self.config.poll_interval()).await;

            let newly_assigned = self.reconcile().await?;
            if !newly_assigned.is_empty() {
                debug!("[ADD] New hashes: {newly_assigned:?}");
            }

            // Another request may have reconciled the hash first; it still appeared after submission.
            if let Ok(id) = self.registry.id_of(&pending.hash) {
                pending.resolved_id = Some(id);
                return Ok(());
            }
            debug!("[ADD] {} not indexed yet, {} attempts left", pending.hash, pending.attempts_left);
        }
        Ok(())
    }
}
