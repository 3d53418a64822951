//! Duplex page interleaving.
//!
//! A two-pass ADF scan produces a front-pages document in forward order and
//! a back-pages document in reverse order (back pages come out of the feeder
//! backwards). Restoring the physical page order means alternating
//! `front[i]` with `back[N-1-i]`.
//!
//! Only page *counts* are compared before merging. Two equal-length
//! documents that are not actually a front/back pair merge without complaint
//! into a nonsensical page order; detecting that would require inspecting
//! page content, which this tool does not attempt.

use lopdf::{Document, Object, ObjectId};

use crate::error::{Result, ScanWeaveError};
use crate::io::LoadedPdf;

/// Result of an interleave operation.
#[derive(Debug)]
pub struct InterleaveResult {
    /// The assembled output document.
    pub document: Document,

    /// Number of pages in the output document. Always twice the page count
    /// of either input.
    pub page_count: usize,
}

/// Interleaves the pages of a duplex scan pair into one document.
#[derive(Debug, Clone, Default)]
pub struct Interleaver;

impl Interleaver {
    /// Create a new interleaver.
    pub fn new() -> Self {
        Self
    }

    /// Interleave `front` and `back` into a new document.
    ///
    /// `front` is assumed to hold the odd (front) pages in forward order and
    /// `back` the even (back) pages in reverse order. The output contains
    /// `front[0], back[N-1], front[1], back[N-2], …, front[N-1], back[0]`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanWeaveError::PageCountMismatch`] when the page counts
    /// differ. The check runs before any assembly, so no output document
    /// exists on that path. Structural problems in either page tree surface
    /// as [`ScanWeaveError::MergeFailed`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scanweave::io::load_pdf;
    /// use scanweave::merge::Interleaver;
    /// use std::path::Path;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let front = load_pdf(Path::new("Scan32.pdf")).await?;
    /// let back = load_pdf(Path::new("Scan50.pdf")).await?;
    ///
    /// let result = Interleaver::new().interleave(&front, &back)?;
    /// assert_eq!(result.page_count, front.page_count * 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn interleave(&self, front: &LoadedPdf, back: &LoadedPdf) -> Result<InterleaveResult> {
        if front.page_count != back.page_count {
            return Err(ScanWeaveError::PageCountMismatch {
                first: front.path.clone(),
                first_pages: front.page_count,
                second: back.path.clone(),
                second_pages: back.page_count,
            });
        }

        // The front document donates the catalog and page tree.
        let mut merged = front.document.clone();
        let mut reversed = back.document.clone();

        // Shift the back document's object IDs past the front's to avoid
        // collisions, then pull everything into one object table.
        reversed.renumber_objects_with(merged.max_id + 1);

        let front_pages: Vec<ObjectId> = merged.get_pages().into_values().collect();
        let back_pages: Vec<ObjectId> = reversed.get_pages().into_values().collect();
        merged.objects.extend(reversed.objects);

        let ordered = interleave_order(&front_pages, &back_pages);
        self.rebuild_page_tree(&mut merged, &ordered)?;

        // Make the ID space dense again after the merge.
        merged.renumber_objects();

        Ok(InterleaveResult {
            page_count: ordered.len(),
            document: merged,
        })
    }

    /// Point the catalog's page tree at the interleaved page sequence.
    ///
    /// Every page is reparented onto the root `Pages` node; the back
    /// document's pages still reference their original tree otherwise.
    fn rebuild_page_tree(&self, doc: &mut Document, ordered: &[ObjectId]) -> Result<()> {
        let catalog = doc
            .catalog_mut()
            .map_err(|e| ScanWeaveError::merge_failed(format!("Failed to get catalog: {e}")))?;

        let pages_id = catalog
            .get(b"Pages")
            .and_then(|p| p.as_reference())
            .map_err(|e| {
                ScanWeaveError::merge_failed(format!("Failed to get pages reference: {e}"))
            })?;

        for &page_id in ordered {
            let page = doc.get_object_mut(page_id).map_err(|e| {
                ScanWeaveError::merge_failed(format!("Failed to get page object: {e}"))
            })?;

            if let Object::Dictionary(dict) = page {
                dict.set("Parent", Object::Reference(pages_id));
            } else {
                return Err(ScanWeaveError::merge_failed(
                    "Page object is not a dictionary",
                ));
            }
        }

        let pages_obj = doc.get_object_mut(pages_id).map_err(|e| {
            ScanWeaveError::merge_failed(format!("Failed to get pages object: {e}"))
        })?;

        if let Object::Dictionary(dict) = pages_obj {
            let kids: Vec<Object> = ordered.iter().map(|&id| Object::Reference(id)).collect();
            dict.set("Kids", Object::Array(kids));
            dict.set("Count", Object::Integer(ordered.len() as i64));
        } else {
            return Err(ScanWeaveError::merge_failed(
                "Pages object is not a dictionary",
            ));
        }

        Ok(())
    }
}

/// Page sequence for a duplex pair: front pages forward, back pages
/// reversed, alternating.
fn interleave_order(front: &[ObjectId], back: &[ObjectId]) -> Vec<ObjectId> {
    debug_assert_eq!(front.len(), back.len());

    let count = front.len();
    let mut ordered = Vec::with_capacity(2 * count);
    for index in 0..count {
        ordered.push(front[index]);
        ordered.push(back[count - 1 - index]);
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use std::path::PathBuf;

    /// Build a document whose pages carry distinguishable MediaBox widths,
    /// so page order survives renumbering and can be read back.
    fn doc_with_page_widths(widths: &[i64]) -> Document {
        let mut doc = Document::with_version("1.4");
        let pages_id = doc.new_object_id();

        let mut kids: Vec<Object> = Vec::new();
        for &width in widths {
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), width.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => widths.len() as i64,
        };
        doc.objects.insert(pages_id, pages_dict.into());

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        doc
    }

    fn loaded(doc: Document, name: &str) -> LoadedPdf {
        let page_count = doc.get_pages().len();
        LoadedPdf {
            document: doc,
            path: PathBuf::from(name),
            page_count,
            file_size: 0,
        }
    }

    /// Read back the MediaBox widths of a document's pages, in page order.
    fn page_widths(doc: &Document) -> Vec<i64> {
        doc.get_pages()
            .into_values()
            .map(|id| {
                let dict = doc.get_object(id).unwrap().as_dict().unwrap();
                let media_box = dict.get(b"MediaBox").unwrap().as_array().unwrap();
                media_box[2].as_i64().unwrap()
            })
            .collect()
    }

    #[test]
    fn test_interleave_order_three_pages() {
        let front: Vec<ObjectId> = vec![(1, 0), (2, 0), (3, 0)];
        let back: Vec<ObjectId> = vec![(4, 0), (5, 0), (6, 0)];

        let ordered = interleave_order(&front, &back);

        assert_eq!(
            ordered,
            vec![(1, 0), (6, 0), (2, 0), (5, 0), (3, 0), (4, 0)]
        );
    }

    #[test]
    fn test_interleave_order_single_page() {
        let ordered = interleave_order(&[(1, 0)], &[(2, 0)]);
        assert_eq!(ordered, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_interleave_three_page_pair() {
        // Front pages A0..A2 and back pages B0..B2, tagged by width.
        let front = loaded(doc_with_page_widths(&[100, 101, 102]), "front.pdf");
        let back = loaded(doc_with_page_widths(&[200, 201, 202]), "back.pdf");

        let result = Interleaver::new().interleave(&front, &back).unwrap();

        assert_eq!(result.page_count, 6);
        // Expected order: A0, B2, A1, B1, A2, B0.
        assert_eq!(
            page_widths(&result.document),
            vec![100, 202, 101, 201, 102, 200]
        );
    }

    #[test]
    fn test_interleaved_pages_are_parented_to_root() {
        let front = loaded(doc_with_page_widths(&[100, 101]), "front.pdf");
        let back = loaded(doc_with_page_widths(&[200, 201]), "back.pdf");

        let result = Interleaver::new().interleave(&front, &back).unwrap();
        let doc = &result.document;

        let catalog = doc.catalog().unwrap();
        let pages_id = catalog.get(b"Pages").and_then(|p| p.as_reference()).unwrap();

        for (_, page_id) in doc.get_pages() {
            let dict = doc.get_object(page_id).unwrap().as_dict().unwrap();
            let parent = dict.get(b"Parent").and_then(|p| p.as_reference()).unwrap();
            assert_eq!(parent, pages_id);
        }
    }

    #[test]
    fn test_page_count_mismatch_is_fatal() {
        let front = loaded(doc_with_page_widths(&[100, 101, 102]), "front.pdf");
        let back = loaded(doc_with_page_widths(&[200, 201, 202, 203]), "back.pdf");

        let result = Interleaver::new().interleave(&front, &back);

        match result {
            Err(ScanWeaveError::PageCountMismatch {
                first_pages,
                second_pages,
                ..
            }) => {
                assert_eq!(first_pages, 3);
                assert_eq!(second_pages, 4);
            }
            other => panic!("Expected PageCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let front = loaded(doc_with_page_widths(&[100]), "front.pdf");
        let back = loaded(doc_with_page_widths(&[200]), "back.pdf");

        let _result = Interleaver::new().interleave(&front, &back).unwrap();

        assert_eq!(page_widths(&front.document), vec![100]);
        assert_eq!(page_widths(&back.document), vec![200]);
    }
}
